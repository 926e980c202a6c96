/// The default actor outline: a head over rounded shoulders

use super::{ActorShape, PathSink};
use crate::Result;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Actor;

impl ActorShape for Actor {
    fn redraw_path(&self, path: &mut dyn PathSink, _x: f64, _y: f64, w: f64, h: f64) -> Result<()> {
        let width = w / 3.0;
        let neck = 2.0 * h / 5.0;

        path.move_to(0.0, h)?;
        path.curve_to(0.0, 3.0 * h / 5.0, 0.0, neck, w / 2.0, neck)?;
        path.curve_to(w / 2.0 - width, neck, w / 2.0 - width, 0.0, w / 2.0, 0.0)?;
        path.curve_to(w / 2.0 + width, 0.0, w / 2.0 + width, neck, w / 2.0, neck)?;
        path.curve_to(w, neck, w, 3.0 * h / 5.0, w, h)?;
        path.close()
    }
}
