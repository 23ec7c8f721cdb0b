//! Integration tests for sampling geometry and the frame-advance pipeline.
//!
//! Sampling uses an unseeded random source, so geometric assertions here
//! are statistical (distribution buckets, bounding dimensions) rather than
//! exact, except for the fully deterministic helix.

use shimmer::{
    advance_into, sample, FrameTransform, ParticleField, Shape, ShapeSpec, JITTER_AMPLITUDE,
    SURFACE_JITTER,
};

fn spec(shape: Shape, count: u32) -> ShapeSpec {
    ShapeSpec { shape, count }
}

const ALL_SHAPES: [Shape; 6] = [
    Shape::Sphere { radius: 1.5 },
    Shape::CubeEdges { size: 2.0 },
    Shape::Helix {
        radius: 0.6,
        height: 2.4,
        turns: 4.0,
    },
    Shape::StarCluster { radius: 1.0 },
    Shape::BarChart { size: 1.6 },
    Shape::NetworkCurve { radius: 1.2 },
];

#[test]
fn every_shape_yields_exact_count_of_finite_points() {
    for shape in ALL_SHAPES {
        for count in [1, 2, 11, 12, 13, 1000] {
            let descriptors = sample(&spec(shape, count)).unwrap();
            assert_eq!(descriptors.len(), count as usize, "{:?}", shape);
            for d in &descriptors {
                assert!(d.base_position.is_finite(), "{:?}", shape);
                assert!(d.phase_offset.is_finite());
            }
        }
    }
}

#[test]
fn sphere_distribution_is_uniform_over_cos_polar_angle() {
    // Points uniform on a sphere surface have cos(φ) uniform in [-1, 1].
    // Bucket it and check no pole clustering: 10 buckets x ~1000 points,
    // binomial σ ≈ 30, so ±200 is far outside noise.
    let count = 10_000;
    let radius = 1.0;
    let descriptors = sample(&spec(Shape::Sphere { radius }, count)).unwrap();

    let mut buckets = [0u32; 10];
    for d in &descriptors {
        let cos_phi = (d.base_position.z / d.base_position.length()).clamp(-1.0, 1.0);
        let bucket = (((cos_phi + 1.0) / 2.0) * 10.0).min(9.0) as usize;
        buckets[bucket] += 1;
    }

    for (i, &n) in buckets.iter().enumerate() {
        assert!(
            (800..=1200).contains(&n),
            "bucket {} holds {} of {} points",
            i,
            n,
            count
        );
    }
}

#[test]
fn cube_points_stay_on_the_cube_surface() {
    let size = 2.0;
    let half = size / 2.0;
    let descriptors = sample(&spec(Shape::CubeEdges { size }, 4_800)).unwrap();

    for d in &descriptors {
        let p = d.base_position;
        // Edge points have at least one coordinate pinned at ±half, so the
        // Chebyshev distance from the origin sits at half, within jitter.
        let cheb = p.x.abs().max(p.y.abs()).max(p.z.abs());
        assert!(
            (cheb - half).abs() <= SURFACE_JITTER + 1e-4,
            "point {:?} is off the cube surface",
            p
        );
    }
}

#[test]
fn helix_is_deterministic_across_samples() {
    let helix = spec(
        Shape::Helix {
            radius: 0.6,
            height: 2.4,
            turns: 4.0,
        },
        500,
    );

    let a = sample(&helix).unwrap();
    let b = sample(&helix).unwrap();

    for (da, db) in a.iter().zip(&b) {
        // Strand geometry carries no jitter; only phases differ.
        assert_eq!(da.base_position, db.base_position);
    }
}

#[test]
fn resampling_preserves_bounding_geometry() {
    let sphere = spec(Shape::Sphere { radius: 2.0 }, 2_000);

    let a = sample(&sphere).unwrap();
    let b = sample(&sphere).unwrap();

    assert_eq!(a.len(), b.len());

    let max_r = |ds: &[shimmer::ParticleDescriptor]| {
        ds.iter()
            .map(|d| d.base_position.length())
            .fold(0.0f32, f32::max)
    };

    // Exact jittered values differ, the bounding radius does not.
    assert!((max_r(&a) - max_r(&b)).abs() <= 2.0 * SURFACE_JITTER);
}

#[test]
fn advance_is_reproducible_for_identical_inputs() {
    let descriptors = sample(&spec(Shape::NetworkCurve { radius: 1.0 }, 256)).unwrap();

    let mut a = vec![FrameTransform::IDENTITY; descriptors.len()];
    let mut b = vec![FrameTransform::IDENTITY; descriptors.len()];
    advance_into(&descriptors, 42.5, 1.7, &mut a);
    advance_into(&descriptors, 42.5, 1.7, &mut b);

    assert_eq!(a, b);
}

#[test]
fn sphere_scenario_four_particles_radius_two() {
    let mut field = ParticleField::new(spec(Shape::Sphere { radius: 2.0 }, 4)).unwrap();

    let transforms = field.advance(0.0);
    assert_eq!(transforms.len(), 4);

    // Base radius is 2 ± SURFACE_JITTER; the isotropic frame jitter adds at
    // most √3 · JITTER_AMPLITUDE to the distance from the origin.
    let bound = 2.0 + SURFACE_JITTER + 3.0f32.sqrt() * JITTER_AMPLITUDE + 1e-4;
    for t in transforms {
        assert!(t.position.length() <= bound, "{:?}", t.position);
    }
}

#[test]
fn single_point_cube_does_not_panic() {
    let descriptors = sample(&spec(Shape::CubeEdges { size: 1.0 }, 1)).unwrap();
    assert_eq!(descriptors.len(), 1);
    assert!(descriptors[0].base_position.is_finite());
}

#[test]
fn field_pipeline_holds_length_invariant_across_respecs() {
    let mut field = ParticleField::new(spec(Shape::Sphere { radius: 1.0 }, 100)).unwrap();

    for shape in ALL_SHAPES {
        for count in [1, 37, 500] {
            field.set_spec(spec(shape, count)).unwrap();
            let transforms = field.advance(1.0);
            assert_eq!(transforms.len(), count as usize);
            assert_eq!(field.descriptors().len(), count as usize);
        }
    }
}

#[test]
fn star_cluster_spans_three_distinct_sizes() {
    let radius = 1.0;
    let descriptors = sample(&spec(Shape::StarCluster { radius }, 3_000)).unwrap();

    // Each third of the list belongs to one star; later stars reach
    // farther from their centers. Compare max outline extents per group.
    let max_extent = |ds: &[shimmer::ParticleDescriptor], center_hint: usize| {
        let group = &ds[center_hint * 1000..(center_hint + 1) * 1000];
        let cx = group.iter().map(|d| d.base_position.x).sum::<f32>() / 1000.0;
        let cy = group.iter().map(|d| d.base_position.y).sum::<f32>() / 1000.0;
        group
            .iter()
            .map(|d| {
                let dx = d.base_position.x - cx;
                let dy = d.base_position.y - cy;
                (dx * dx + dy * dy).sqrt()
            })
            .fold(0.0f32, f32::max)
    };

    let extents = [
        max_extent(&descriptors, 0),
        max_extent(&descriptors, 1),
        max_extent(&descriptors, 2),
    ];
    assert!(extents[0] < extents[1] && extents[1] < extents[2], "{:?}", extents);
}
