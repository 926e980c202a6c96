/// Six-sided outline with flat top and bottom edges

use super::{ActorShape, PathSink};
use crate::Result;

/// Hexagon inscribed in its box. The top and bottom edges span the middle
/// half of the width; the left and right vertices sit at half height.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hexagon;

impl ActorShape for Hexagon {
    fn redraw_path(&self, path: &mut dyn PathSink, _x: f64, _y: f64, w: f64, h: f64) -> Result<()> {
        path.move_to(0.25 * w, 0.0)?;
        path.line_to(0.75 * w, 0.0)?;
        path.line_to(w, 0.5 * h)?;
        path.line_to(0.75 * w, h)?;
        path.line_to(0.25 * w, h)?;
        path.line_to(0.0, 0.5 * h)?;
        path.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{PathCommand, RecordingSink};

    fn record(w: f64, h: f64) -> RecordingSink {
        let mut sink = RecordingSink::new();
        Hexagon.redraw_path(&mut sink, 0.0, 0.0, w, h).unwrap();
        sink
    }

    #[test]
    fn emits_six_vertices_and_one_close() {
        let sink = record(100.0, 60.0);
        assert_eq!(
            sink.vertices(),
            vec![
                (25.0, 0.0),
                (75.0, 0.0),
                (100.0, 30.0),
                (75.0, 60.0),
                (25.0, 60.0),
                (0.0, 30.0),
            ]
        );
        assert_eq!(sink.commands()[0], PathCommand::MoveTo { x: 25.0, y: 0.0 });
        assert_eq!(sink.commands().last(), Some(&PathCommand::Close));
        assert_eq!(sink.close_count(), 1);
    }

    #[test]
    fn opposite_vertices_reflect_through_centre() {
        for (w, h) in [(100.0, 60.0), (7.0, 3.0), (0.0, 12.0), (1.5, 0.0)] {
            let v = record(w, h).vertices();
            for i in 0..6 {
                let (ax, ay) = v[i];
                let (bx, by) = v[(i + 3) % 6];
                assert!((ax + bx - w).abs() < 1e-9, "x symmetry for {}x{}", w, h);
                assert!((ay + by - h).abs() < 1e-9, "y symmetry for {}x{}", w, h);
            }
        }
    }

    #[test]
    fn zero_width_collapses_onto_the_y_axis() {
        let sink = record(0.0, 40.0);
        assert!(sink.vertices().iter().all(|&(x, _)| x == 0.0));
        assert_eq!(sink.close_count(), 1);
    }

    #[test]
    fn origin_does_not_affect_the_path() {
        let mut a = RecordingSink::new();
        let mut b = RecordingSink::new();
        Hexagon.redraw_path(&mut a, 0.0, 0.0, 30.0, 20.0).unwrap();
        Hexagon.redraw_path(&mut b, 400.0, -12.0, 30.0, 20.0).unwrap();
        assert_eq!(a, b);
    }
}
