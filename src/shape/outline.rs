/// Bounds, direction and the outline string built from a shape

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::path::{PathBuilder, PathFormat};
use super::ActorShape;
use crate::{Error, PathConfig, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Which way a shape points. `East` is the natural orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    East,
    South,
    West,
    North,
}

impl Direction {
    /// North and south draw the shape into a box with width and height swapped
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "east" => Ok(Direction::East),
            "south" => Ok(Direction::South),
            "west" => Ok(Direction::West),
            "north" => Ok(Direction::North),
            other => Err(Error::Config(format!("unknown direction '{}'", other))),
        }
    }
}

/// Draw `shape` into `bounds` and return the path string.
///
/// For vertical directions the box is swapped around its centre before the
/// shape sees it. SVG output is translated to the box origin; VML output is
/// drawn relative to the shape element and only carries the swap offset.
pub fn create_path(
    shape: &dyn ActorShape,
    bounds: Rect,
    direction: Direction,
    format: PathFormat,
) -> Result<String> {
    let Rect {
        mut x,
        mut y,
        mut width,
        mut height,
    } = bounds;
    let mut dx = 0.0;

    if direction.is_vertical() {
        dx = (width - height) / 2.0;
        let dy = (height - width) / 2.0;
        x += dx;
        y += dy;
        std::mem::swap(&mut width, &mut height);
    }

    let mut path = PathBuilder::new(PathConfig {
        format,
        ..Default::default()
    });
    match format {
        PathFormat::Svg => path.set_translate(x, y),
        PathFormat::Vml => path.set_translate(dx, -dx),
    }

    shape.redraw_path(&mut path, x, y, width, height)?;

    Ok(path.into_path())
}
