//! String path builder for SVG `d` attributes and VML `path` values.
//!
//! Every coordinate is offset by the configured translation and rounded to an
//! integer before it is written, half-way values rounding up.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::outline::Point;
use super::PathSink;
use crate::{Error, PathConfig, Result};

/// Output dialect of a [`PathBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    #[default]
    Svg,
    Vml,
}

impl FromStr for PathFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(PathFormat::Svg),
            "vml" => Ok(PathFormat::Vml),
            other => Err(Error::Config(format!("unknown path format '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathBuilder {
    format: PathFormat,
    translate: Point,
    buf: String,
}

impl PathBuilder {
    pub fn new(config: PathConfig) -> Self {
        Self {
            format: config.format,
            translate: config.translate,
            buf: String::new(),
        }
    }

    pub fn svg() -> Self {
        Self::new(PathConfig::default())
    }

    pub fn vml() -> Self {
        Self::new(PathConfig {
            format: PathFormat::Vml,
            ..Default::default()
        })
    }

    pub fn format(&self) -> PathFormat {
        self.format
    }

    pub fn is_vml(&self) -> bool {
        self.format == PathFormat::Vml
    }

    pub fn translate(&self) -> Point {
        self.translate
    }

    /// Offset applied to every subsequent coordinate
    pub fn set_translate(&mut self, x: f64, y: f64) {
        self.translate = Point::new(x, y);
    }

    /// The accumulated path string
    pub fn path(&self) -> &str {
        &self.buf
    }

    pub fn into_path(self) -> String {
        self.buf
    }

    /// Append a raw token followed by a separator
    pub fn write(&mut self, token: &str) {
        self.buf.push_str(token);
        self.buf.push(' ');
    }

    /// Append the tokens of another builder
    pub fn append(&mut self, other: &PathBuilder) {
        self.buf.push_str(&other.buf);
    }

    /// Terminate an open VML path. No-op for SVG.
    pub fn end(&mut self) {
        if self.is_vml() {
            self.buf.push('e');
        }
    }

    fn command(&mut self, op: &str, coords: &[(f64, f64)]) {
        self.buf.push_str(op);
        self.buf.push(' ');
        for &(x, y) in coords {
            let px = round_half_up(self.translate.x + x);
            let py = round_half_up(self.translate.y + y);
            // Writing into a String cannot fail.
            let _ = write!(self.buf, "{} {} ", px, py);
        }
    }

    fn op(&self, svg: &'static str, vml: &'static str) -> &'static str {
        if self.is_vml() {
            vml
        } else {
            svg
        }
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::svg()
    }
}

impl PathSink for PathBuilder {
    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        let op = self.op("M", "m");
        self.command(op, &[(x, y)]);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        let op = self.op("L", "l");
        self.command(op, &[(x, y)]);
        Ok(())
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) -> Result<()> {
        // VML has no quadratic segment; repeat the end point as second control.
        if self.is_vml() {
            self.command("c", &[(x1, y1), (x, y), (x, y)]);
        } else {
            self.command("Q", &[(x1, y1), (x, y)]);
        }
        Ok(())
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Result<()> {
        let op = self.op("C", "c");
        self.command(op, &[(x1, y1), (x2, y2), (x, y)]);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let tail = self.op("Z", "x e");
        self.buf.push_str(tail);
        Ok(())
    }
}

/// Round to the nearest integer, halves toward positive infinity
pub(crate) fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
