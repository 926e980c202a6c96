/// Cloud outline built from six cubic segments

use super::{ActorShape, PathSink};
use crate::Result;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cloud;

impl ActorShape for Cloud {
    fn redraw_path(&self, path: &mut dyn PathSink, _x: f64, _y: f64, w: f64, h: f64) -> Result<()> {
        path.move_to(0.25 * w, 0.25 * h)?;
        path.curve_to(0.05 * w, 0.25 * h, 0.0, 0.5 * h, 0.16 * w, 0.55 * h)?;
        path.curve_to(0.0, 0.66 * h, 0.18 * w, 0.9 * h, 0.31 * w, 0.8 * h)?;
        path.curve_to(0.4 * w, h, 0.7 * w, h, 0.8 * w, 0.8 * h)?;
        path.curve_to(w, 0.8 * h, w, 0.6 * h, 0.875 * w, 0.5 * h)?;
        path.curve_to(w, 0.3 * h, 0.8 * w, 0.1 * h, 0.625 * w, 0.2 * h)?;
        path.curve_to(0.5 * w, 0.05 * h, 0.3 * w, 0.05 * h, 0.25 * w, 0.25 * h)?;
        path.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{NullSink, RecordingSink};

    #[test]
    fn outline_returns_to_its_start() {
        let mut sink = RecordingSink::new();
        Cloud.redraw_path(&mut sink, 0.0, 0.0, 200.0, 100.0).unwrap();
        let v = sink.vertices();
        assert_eq!(v.len(), 7);
        assert_eq!(v.first(), v.last());
        assert_eq!(v[0], (50.0, 25.0));
    }

    #[test]
    fn curve_free_sinks_receive_straight_segments() {
        // NullSink only implements move/line/close
        Cloud.redraw_path(&mut NullSink, 0.0, 0.0, 1.0, 1.0).unwrap();
    }
}
