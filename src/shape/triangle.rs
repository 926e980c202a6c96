/// Triangle pointing right

use super::{ActorShape, PathSink};
use crate::Result;

/// Triangle with a full-height vertical edge on the left and its apex at the
/// middle of the right edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Triangle;

impl ActorShape for Triangle {
    fn redraw_path(&self, path: &mut dyn PathSink, _x: f64, _y: f64, w: f64, h: f64) -> Result<()> {
        path.move_to(0.0, 0.0)?;
        path.line_to(w, 0.5 * h)?;
        path.line_to(0.0, h)?;
        path.close()
    }
}
