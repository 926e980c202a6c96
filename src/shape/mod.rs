//! Actor-like shapes and the path sinks they draw into
//!
//! A shape turns a `w` x `h` bounding box into an outline by emitting drawing
//! commands through a [`PathSink`]. Coordinates are local to the box: the
//! caller (or the sink, see [`PathBuilder`]) applies the `(x, y)` offset.

pub mod actor;
pub mod cloud;
pub mod command;
pub mod hexagon;
pub mod outline;
pub mod path;
pub mod triangle;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use actor::Actor;
pub use cloud::Cloud;
pub use command::{PathCommand, RecordingSink};
pub use hexagon::Hexagon;
pub use outline::{create_path, Direction, Point, Rect};
pub use path::{PathBuilder, PathFormat};
pub use triangle::Triangle;

/// Consumer of move/line/close drawing commands.
///
/// Errors returned by a sink are handed back to the caller of
/// [`ActorShape::redraw_path`] untouched.
pub trait PathSink {
    /// Start a new subpath at `(x, y)`
    fn move_to(&mut self, x: f64, y: f64) -> Result<()>;

    /// Draw a straight segment to `(x, y)`
    fn line_to(&mut self, x: f64, y: f64) -> Result<()>;

    /// Draw a quadratic segment. Sinks without curve support get a straight
    /// segment to the end point.
    fn quad_to(&mut self, _x1: f64, _y1: f64, x: f64, y: f64) -> Result<()> {
        self.line_to(x, y)
    }

    /// Draw a cubic segment. Sinks without curve support get a straight
    /// segment to the end point.
    fn curve_to(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, x: f64, y: f64) -> Result<()> {
        self.line_to(x, y)
    }

    /// Close the current subpath
    fn close(&mut self) -> Result<()>;
}

/// A fixed-geometry drawable primitive.
///
/// Implementations are stateless: the emitted path depends on `w` and `h`
/// only, so calling `redraw_path` repeatedly with the same box yields the same
/// commands. `x` and `y` are passed through for variants that want them but
/// the built-in shapes ignore them.
pub trait ActorShape: Send + Sync + fmt::Debug {
    fn redraw_path(&self, path: &mut dyn PathSink, x: f64, y: f64, w: f64, h: f64) -> Result<()>;
}

/// A sink that accepts and discards every command
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        NullSink
    }
}

impl PathSink for NullSink {
    fn move_to(&mut self, _x: f64, _y: f64) -> Result<()> {
        Ok(())
    }

    fn line_to(&mut self, _x: f64, _y: f64) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The built-in actor-like shapes, addressable by their style name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Actor,
    Cloud,
    Hexagon,
    Triangle,
}

impl ShapeKind {
    /// Every built-in shape, in name order
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Actor,
        ShapeKind::Cloud,
        ShapeKind::Hexagon,
        ShapeKind::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Actor => "actor",
            ShapeKind::Cloud => "cloud",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Look up a shape by its style name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The stateless renderer for this kind
    pub fn shape(self) -> &'static dyn ActorShape {
        match self {
            ShapeKind::Actor => &Actor,
            ShapeKind::Cloud => &Cloud,
            ShapeKind::Hexagon => &Hexagon,
            ShapeKind::Triangle => &Triangle,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl PathSink for FailingSink {
        fn move_to(&mut self, _x: f64, _y: f64) -> Result<()> {
            Ok(())
        }

        fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
            Err(Error::Sink(format!("line to {} {} rejected", x, y)))
        }

        fn close(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn shape_kind_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
        }
        assert_eq!(ShapeKind::from_name(" Hexagon "), Some(ShapeKind::Hexagon));
    }

    #[test]
    fn unknown_shape_name_is_an_error() {
        match "rhombus".parse::<ShapeKind>() {
            Err(Error::UnknownShape(name)) => assert_eq!(name, "rhombus"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn sink_errors_are_returned_unchanged() {
        let err = Hexagon
            .redraw_path(&mut FailingSink, 0.0, 0.0, 100.0, 40.0)
            .unwrap_err();
        match err {
            Error::Sink(msg) => assert_eq!(msg, "line to 75 0 rejected"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn null_sink_accepts_every_shape() {
        let mut sink = NullSink::new();
        for kind in ShapeKind::ALL {
            kind.shape().redraw_path(&mut sink, 0.0, 0.0, 10.0, 10.0).unwrap();
        }
    }
}
