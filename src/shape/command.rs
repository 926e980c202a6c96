/// Recorded drawing commands, for inspection and fingerprinting

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::PathSink;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    QuadTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    /// End point of the command, `None` for `Close`
    pub fn end_point(&self) -> Option<(f64, f64)> {
        match *self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::QuadTo { x, y, .. }
            | PathCommand::CurveTo { x, y, .. } => Some((x, y)),
            PathCommand::Close => None,
        }
    }
}

/// A sink that keeps every command it receives, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    commands: Vec<PathCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    /// End points of all move/line/curve commands
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.commands.iter().filter_map(PathCommand::end_point).collect()
    }

    /// Number of `Close` commands seen
    pub fn close_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Close))
            .count()
    }

    /// Hex-encoded sha256 of the JSON command list
    pub fn fingerprint(&self) -> Result<String> {
        let json = serde_json::to_vec(&self.commands)?;
        Ok(hex::encode(Sha256::digest(&json)))
    }
}

impl PathSink for RecordingSink {
    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.commands.push(PathCommand::MoveTo { x, y });
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.commands.push(PathCommand::LineTo { x, y });
        Ok(())
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) -> Result<()> {
        self.commands.push(PathCommand::QuadTo { x1, y1, x, y });
        Ok(())
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Result<()> {
        self.commands.push(PathCommand::CurveTo { x1, y1, x2, y2, x, y });
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.commands.push(PathCommand::Close);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut sink = RecordingSink::new();
        sink.move_to(1.0, 2.0).unwrap();
        sink.curve_to(0.0, 0.0, 1.0, 1.0, 3.0, 4.0).unwrap();
        sink.close().unwrap();

        assert_eq!(sink.commands().len(), 3);
        assert_eq!(sink.vertices(), vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(sink.close_count(), 1);
    }

    #[test]
    fn fingerprint_is_stable_and_content_addressed() {
        let mut a = RecordingSink::new();
        a.move_to(0.0, 0.0).unwrap();
        a.close().unwrap();
        let mut b = a.clone();

        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
        assert_eq!(a.fingerprint().unwrap().len(), 64);

        b.line_to(1.0, 1.0).unwrap();
        assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }

    #[test]
    fn commands_serialize_with_op_tag() {
        let json = serde_json::to_string(&PathCommand::LineTo { x: 1.5, y: 0.0 }).unwrap();
        assert_eq!(json, r#"{"op":"line_to","x":1.5,"y":0.0}"#);
        let close = serde_json::to_string(&PathCommand::Close).unwrap();
        assert_eq!(close, r#"{"op":"close"}"#);
    }
}
