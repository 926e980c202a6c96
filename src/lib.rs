//! Diagram Core
//!
//! Building blocks shared by diagram renderers and persistence layers:
//!
//! - **Shapes**: fixed-geometry outlines ([`shape::Hexagon`],
//!   [`shape::Triangle`], ...) that draw a `w` x `h` box through any
//!   [`shape::PathSink`]
//! - **Images**: the [`Image`] descriptor referenced by styles
//! - **Codecs**: [`codec::ObjectCodec`] and [`codec::CodecRegistry`], which
//!   persist an object's fields except the ones declared transient
//!
//! # Example
//!
//! ```
//! use diagram_core::shape::{create_path, Direction, Hexagon, PathFormat, Rect};
//!
//! # fn main() -> diagram_core::Result<()> {
//! let d = create_path(
//!     &Hexagon,
//!     Rect::new(0.0, 0.0, 100.0, 40.0),
//!     Direction::East,
//!     PathFormat::Svg,
//! )?;
//! assert_eq!(d, "M 25 0 L 75 0 L 100 20 L 75 40 L 25 40 L 0 20 Z");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod codec;
pub mod image;
pub mod shape;

pub use codec::{CodecRegistry, EncodedObject, Graph, ObjectCodec, Persistable};
pub use image::Image;
pub use shape::{ActorShape, PathSink, ShapeKind};

use shape::{PathFormat, Point};

/// Configuration applied by a [`CodecRegistry`] when encoding
///
/// # Examples
///
/// ```
/// let cfg = diagram_core::CodecConfig::default();
/// assert!(!cfg.encode_defaults);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Write fields even when they equal the template's value
    pub encode_defaults: bool,
}

/// Configuration for a string [`shape::PathBuilder`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathConfig {
    /// Output dialect
    pub format: PathFormat,
    /// Offset added to every coordinate before rounding
    pub translate: Point,
}
