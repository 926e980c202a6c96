use criterion::{black_box, criterion_group, criterion_main, Criterion};

use diagram_core::shape::{create_path, Direction, NullSink, PathFormat, RecordingSink, Rect};
use diagram_core::{ActorShape, ShapeKind};

fn bench_redraw_null_sink(c: &mut Criterion) {
    let mut sink = NullSink::new();
    for kind in ShapeKind::ALL {
        c.bench_function(&format!("redraw_{}_null_sink", kind), |b| {
            b.iter(|| {
                kind.shape()
                    .redraw_path(&mut sink, 0.0, 0.0, black_box(120.0), black_box(80.0))
                    .unwrap();
            })
        });
    }
}

fn bench_record_commands(c: &mut Criterion) {
    c.bench_function("record_cloud_commands", |b| {
        b.iter(|| {
            let mut sink = RecordingSink::new();
            ShapeKind::Cloud
                .shape()
                .redraw_path(&mut sink, 0.0, 0.0, black_box(120.0), black_box(80.0))
                .unwrap();
            sink
        })
    });
}

fn bench_create_path(c: &mut Criterion) {
    let bounds = Rect::new(10.0, 20.0, 120.0, 80.0);
    for format in [PathFormat::Svg, PathFormat::Vml] {
        c.bench_function(&format!("create_hexagon_path_{:?}", format), |b| {
            b.iter(|| {
                create_path(
                    ShapeKind::Hexagon.shape(),
                    black_box(bounds),
                    Direction::North,
                    format,
                )
                .unwrap()
            })
        });
    }
}

criterion_group!(
    benches,
    bench_redraw_null_sink,
    bench_record_commands,
    bench_create_path
);
criterion_main!(benches);
