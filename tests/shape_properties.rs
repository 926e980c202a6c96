//! Geometric properties of the built-in shapes over a spread of boxes

use diagram_core::shape::{Hexagon, PathCommand, RecordingSink, Triangle};
use diagram_core::{ActorShape, Image};

const BOXES: [(f64, f64); 8] = [
    (0.0, 0.0),
    (0.0, 35.0),
    (48.0, 0.0),
    (1.0, 1.0),
    (100.0, 60.0),
    (3.5, 17.25),
    (1e6, 2.0),
    (0.001, 999.0),
];

fn record(shape: &dyn ActorShape, w: f64, h: f64) -> RecordingSink {
    let mut sink = RecordingSink::new();
    shape.redraw_path(&mut sink, 12.0, -7.0, w, h).expect("redraw");
    sink
}

#[test]
fn hexagon_has_six_vertices_and_point_symmetry() {
    for (w, h) in BOXES {
        let sink = record(&Hexagon, w, h);
        let cmds = sink.commands();
        assert_eq!(cmds.len(), 7);
        assert!(matches!(cmds[0], PathCommand::MoveTo { .. }));
        assert!(cmds[1..6]
            .iter()
            .all(|c| matches!(c, PathCommand::LineTo { .. })));
        assert_eq!(cmds[6], PathCommand::Close);

        let v = sink.vertices();
        for i in 0..6 {
            let (ax, ay) = v[i];
            let (bx, by) = v[(i + 3) % 6];
            assert!(((ax + bx) / 2.0 - w / 2.0).abs() <= 1e-9 * w.max(1.0));
            assert!(((ay + by) / 2.0 - h / 2.0).abs() <= 1e-9 * h.max(1.0));
        }
    }
}

#[test]
fn hexagon_with_zero_width_stays_on_x_zero() {
    let sink = record(&Hexagon, 0.0, 50.0);
    assert!(sink.vertices().iter().all(|&(x, _)| x == 0.0));
    assert_eq!(sink.commands().last(), Some(&PathCommand::Close));
}

#[test]
fn triangle_vertices_are_fixed_by_the_box() {
    for (w, h) in BOXES {
        let sink = record(&Triangle, w, h);
        assert_eq!(sink.commands().len(), 4);
        assert_eq!(sink.vertices(), vec![(0.0, 0.0), (w, h / 2.0), (0.0, h)]);
        assert_eq!(sink.close_count(), 1);
    }
}

#[test]
fn triangle_with_zero_height_stays_on_y_zero() {
    let sink = record(&Triangle, 30.0, 0.0);
    assert!(sink.vertices().iter().all(|&(_, y)| y == 0.0));
}

#[test]
fn repeated_redraws_fingerprint_identically() {
    for (w, h) in BOXES {
        let a = record(&Hexagon, w, h).fingerprint().unwrap();
        let b = record(&Hexagon, w, h).fingerprint().unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn image_descriptor_reads_back_what_was_given() {
    let img = Image::new("a.png", 10.0, 20.0);
    assert_eq!((img.src(), img.width(), img.height()), ("a.png", 10.0, 20.0));

    let odd = Image::new(String::new(), -1.0, 0.5);
    assert_eq!((odd.src(), odd.width(), odd.height()), ("", -1.0, 0.5));
}
