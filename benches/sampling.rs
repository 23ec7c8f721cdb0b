//! Benchmarks for shape sampling and per-frame advancement.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shimmer::{advance_into, sample, FrameTransform, Shape, ShapeSpec};

fn bench_sample_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    let shapes = [
        ("sphere", Shape::Sphere { radius: 1.0 }),
        ("cube_edges", Shape::CubeEdges { size: 2.0 }),
        (
            "helix",
            Shape::Helix {
                radius: 0.6,
                height: 2.4,
                turns: 4.0,
            },
        ),
        ("star_cluster", Shape::StarCluster { radius: 1.0 }),
        ("bar_chart", Shape::BarChart { size: 1.6 }),
        ("network_curve", Shape::NetworkCurve { radius: 1.2 }),
    ];

    for (name, shape) in shapes {
        group.bench_function(name, |b| {
            let spec = ShapeSpec {
                shape,
                count: 10_000,
            };
            b.iter(|| black_box(sample(&spec).unwrap()))
        });
    }

    group.finish();
}

fn bench_sample_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_sphere_counts");

    for count in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let spec = ShapeSpec {
                shape: Shape::Sphere { radius: 1.0 },
                count,
            };
            b.iter(|| black_box(sample(&spec).unwrap()))
        });
    }

    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for count in [10_000u32, 100_000] {
        let descriptors = sample(&ShapeSpec {
            shape: Shape::Sphere { radius: 1.0 },
            count,
        })
        .unwrap();
        let mut transforms = vec![FrameTransform::IDENTITY; descriptors.len()];

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let mut elapsed = 0.0f32;
            b.iter(|| {
                elapsed += 1.0 / 60.0;
                advance_into(&descriptors, elapsed, 1.0, &mut transforms);
                black_box(&transforms);
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sample_shapes,
    bench_sample_counts,
    bench_advance
);
criterion_main!(benches);
