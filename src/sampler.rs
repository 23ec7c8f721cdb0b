//! Shape sampling: turning a [`ShapeSpec`] into particle descriptors.
//!
//! Sampling runs once at field construction (or whenever the spec changes)
//! and produces the immutable descriptor list the oscillator reads every
//! frame. It is a pure function of the spec except for a uniform random
//! source used for small positional jitter and per-particle phase offsets.
//!
//! There is no seeding contract: the deterministic geometry (point counts,
//! edge/strand/star assignment, bounding dimensions) is reproducible across
//! calls, while exact jittered values vary run to run. Tests assert
//! statistical properties, not bit-identical output.

use crate::error::ConfigError;
use crate::particle::ParticleDescriptor;
use crate::shape::{Shape, ShapeSpec};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// Magnitude of the random positional jitter applied while sampling, in
/// shape-space units. Jittered shapes read as dusty outlines rather than
/// mathematically exact curves.
pub const SURFACE_JITTER: f32 = 0.02;

/// Sample a complete descriptor list for the given spec.
///
/// Returns exactly `spec.count` descriptors with finite coordinates, or a
/// [`ConfigError`] if the spec is invalid. Never yields a partial list.
///
/// # Example
///
/// ```ignore
/// let descriptors = sample(&ShapeSpec {
///     shape: Shape::Sphere { radius: 2.0 },
///     count: 4,
/// })?;
/// assert_eq!(descriptors.len(), 4);
/// ```
pub fn sample(spec: &ShapeSpec) -> Result<Vec<ParticleDescriptor>, ConfigError> {
    spec.validate()?;

    let count = spec.count as usize;
    let mut ctx = SampleContext::new(spec.count);
    let mut descriptors = Vec::with_capacity(count);

    for i in 0..count {
        let base_position = match spec.shape {
            Shape::Sphere { radius } => sphere_point(&mut ctx, radius),
            Shape::CubeEdges { size } => cube_edge_point(&mut ctx, i, count, size),
            Shape::Helix {
                radius,
                height,
                turns,
            } => helix_point(i, count, radius, height, turns),
            Shape::StarCluster { radius } => star_point(&mut ctx, i, count, radius),
            Shape::BarChart { size } => bar_chart_point(&mut ctx, i, count, size),
            Shape::NetworkCurve { radius } => network_point(&mut ctx, i, count, radius),
        };

        descriptors.push(ParticleDescriptor {
            base_position,
            phase_offset: ctx.phase(),
        });
    }

    Ok(descriptors)
}

/// Random source and helpers shared by the shape functions.
struct SampleContext {
    rng: SmallRng,
}

impl SampleContext {
    fn new(count: u32) -> Self {
        // Seeded from the clock so runs differ, without imposing a
        // reproducibility contract.
        let seed = count as u64
            ^ std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42);

        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 in `[0, 1)`.
    #[inline]
    fn uniform(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    fn range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random scalar jitter in `[-SURFACE_JITTER, SURFACE_JITTER]`.
    #[inline]
    fn jitter(&mut self) -> f32 {
        self.range(-SURFACE_JITTER, SURFACE_JITTER)
    }

    /// Independent per-axis jitter.
    fn jitter_vec(&mut self) -> Vec3 {
        Vec3::new(self.jitter(), self.jitter(), self.jitter())
    }

    /// Per-particle phase offset in `[0, 2π)`.
    #[inline]
    fn phase(&mut self) -> f32 {
        self.range(0.0, TAU)
    }
}

/// Split `count` points across `units` structural units (edges, stars,
/// bars) in near-equal groups.
///
/// Returns `(unit, local_index, group_len)` for the point at `index`. The
/// remainder always lands on the final unit; with fewer points than units,
/// early units get one point each and the rest stay empty. `count == 1`
/// therefore lands on unit 0.
fn partition(index: usize, count: usize, units: usize) -> (usize, usize, usize) {
    let per = (count / units).max(1);
    let unit = (index / per).min(units - 1);
    let start = unit * per;
    let group_len = if unit == units - 1 {
        count - start
    } else {
        per
    };
    (unit, index - start, group_len)
}

/// Fraction along an open segment for the `local`th of `len` points.
fn segment_t(local: usize, len: usize) -> f32 {
    if len > 1 {
        local as f32 / (len - 1) as f32
    } else {
        0.5
    }
}

// ========== Per-shape geometry ==========

/// Uniform distribution over the sphere surface: polar angle drawn as
/// `acos(2u - 1)` so points do not cluster at the poles.
fn sphere_point(ctx: &mut SampleContext, radius: f32) -> Vec3 {
    let theta = ctx.range(0.0, TAU);
    let phi = (2.0 * ctx.uniform() - 1.0).acos();
    let r = radius + ctx.jitter();

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// The 12 edges of a unit cube (half-extent 1), as corner pairs.
const CUBE_EDGES: [(Vec3, Vec3); 12] = [
    // bottom face
    (Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, -1.0, -1.0)),
    (Vec3::new(1.0, -1.0, -1.0), Vec3::new(1.0, -1.0, 1.0)),
    (Vec3::new(1.0, -1.0, 1.0), Vec3::new(-1.0, -1.0, 1.0)),
    (Vec3::new(-1.0, -1.0, 1.0), Vec3::new(-1.0, -1.0, -1.0)),
    // top face
    (Vec3::new(-1.0, 1.0, -1.0), Vec3::new(1.0, 1.0, -1.0)),
    (Vec3::new(1.0, 1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)),
    (Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, 1.0, 1.0)),
    (Vec3::new(-1.0, 1.0, 1.0), Vec3::new(-1.0, 1.0, -1.0)),
    // verticals
    (Vec3::new(-1.0, -1.0, -1.0), Vec3::new(-1.0, 1.0, -1.0)),
    (Vec3::new(1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, -1.0)),
    (Vec3::new(1.0, -1.0, 1.0), Vec3::new(1.0, 1.0, 1.0)),
    (Vec3::new(-1.0, -1.0, 1.0), Vec3::new(-1.0, 1.0, 1.0)),
];

fn cube_edge_point(ctx: &mut SampleContext, index: usize, count: usize, size: f32) -> Vec3 {
    let (edge, local, len) = partition(index, count, CUBE_EDGES.len());
    let (a, b) = CUBE_EDGES[edge];
    let half = size * 0.5;

    a.lerp(b, segment_t(local, len)) * half + ctx.jitter_vec()
}

/// Two interleaved strands alternating by index parity; the odd strand is
/// rotated π against the even one. Fully deterministic.
fn helix_point(index: usize, count: usize, radius: f32, height: f32, turns: f32) -> Vec3 {
    let t = index as f32 / count as f32;
    let strand = (index % 2) as f32;
    let angle = t * TAU * turns + strand * PI;

    Vec3::new(
        radius * angle.cos(),
        (t - 0.5) * height,
        radius * angle.sin(),
    )
}

/// Relative sizes of the three stars, smallest first.
const STAR_SCALES: [f32; 3] = [0.5, 0.75, 1.0];

/// Star centers as fractions of the cluster radius.
const STAR_OFFSETS: [Vec3; 3] = [
    Vec3::new(-0.9, 0.55, 0.0),
    Vec3::new(0.75, 0.25, -0.2),
    Vec3::new(0.0, -0.55, 0.15),
];

fn star_point(ctx: &mut SampleContext, index: usize, count: usize, radius: f32) -> Vec3 {
    let (star, local, len) = partition(index, count, STAR_SCALES.len());

    // Closed outline: t in [0, 1) so the seam does not double up.
    let angle = local as f32 / len as f32 * TAU;
    let r = radius * STAR_SCALES[star] * (0.5 + 0.3 * (5.0 * angle).sin());
    let center = STAR_OFFSETS[star] * radius;

    center + Vec3::new(r * angle.cos(), r * angle.sin(), 0.0) + ctx.jitter_vec()
}

/// Bar x positions as fractions of the chart size.
const BAR_X: [f32; 3] = [-0.55, 0.0, 0.55];

fn bar_chart_point(ctx: &mut SampleContext, index: usize, count: usize, size: f32) -> Vec3 {
    // Units 0..2 are the bars (heights 1x, 2x, 3x), unit 3 is the arrow.
    let (unit, local, len) = partition(index, count, 4);
    let t = segment_t(local, len);
    let baseline = -0.75 * size;

    let spine = if unit < 3 {
        let bar_height = (unit + 1) as f32 * 0.5 * size;
        Vec3::new(BAR_X[unit] * size, baseline + t * bar_height, 0.0)
    } else {
        // Diagonal trend arrow rising across the bars, slightly in front.
        let start = Vec3::new(-0.8 * size, -0.55 * size, 0.12 * size);
        let end = Vec3::new(0.8 * size, 0.7 * size, 0.12 * size);
        start.lerp(end, t)
    };

    spine + ctx.jitter_vec()
}

fn network_point(ctx: &mut SampleContext, index: usize, count: usize, radius: f32) -> Vec3 {
    let angle = index as f32 / count as f32 * TAU;
    let r = radius * (0.5 + 0.3 * (2.0 * angle).sin());
    let y = 0.3 * radius * (2.0 * angle).sin();

    Vec3::new(r * angle.cos(), y, r * angle.sin()) + ctx.jitter_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(shape: Shape, count: u32) -> ShapeSpec {
        ShapeSpec { shape, count }
    }

    #[test]
    fn test_partition_even_split() {
        // 24 points over 12 edges: 2 each.
        for i in 0..24 {
            let (unit, local, len) = partition(i, 24, 12);
            assert_eq!(unit, i / 2);
            assert_eq!(local, i % 2);
            assert_eq!(len, 2);
        }
    }

    #[test]
    fn test_partition_remainder_on_final_unit() {
        // 25 points over 12 edges: last edge absorbs the extra point.
        let (unit, _, len) = partition(24, 25, 12);
        assert_eq!(unit, 11);
        assert_eq!(len, 3);
    }

    #[test]
    fn test_partition_single_point_lands_on_unit_zero() {
        let (unit, local, len) = partition(0, 1, 12);
        assert_eq!(unit, 0);
        assert_eq!(local, 0);
        assert_eq!(len, 1);
    }

    #[test]
    fn test_sample_returns_exact_count() {
        let shapes = [
            Shape::Sphere { radius: 1.0 },
            Shape::CubeEdges { size: 1.0 },
            Shape::Helix {
                radius: 0.5,
                height: 2.0,
                turns: 3.0,
            },
            Shape::StarCluster { radius: 1.0 },
            Shape::BarChart { size: 1.0 },
            Shape::NetworkCurve { radius: 1.0 },
        ];
        for shape in shapes {
            for count in [1, 7, 100] {
                let descriptors = sample(&spec(shape, count)).unwrap();
                assert_eq!(descriptors.len(), count as usize);
            }
        }
    }

    #[test]
    fn test_sample_coordinates_finite() {
        let shapes = [
            Shape::Sphere { radius: 3.0 },
            Shape::CubeEdges { size: 2.0 },
            Shape::Helix {
                radius: 0.5,
                height: 2.0,
                turns: 4.0,
            },
            Shape::StarCluster { radius: 1.5 },
            Shape::BarChart { size: 2.0 },
            Shape::NetworkCurve { radius: 1.0 },
        ];
        for shape in shapes {
            for d in sample(&spec(shape, 500)).unwrap() {
                assert!(d.base_position.is_finite(), "{:?} -> {:?}", shape, d);
                assert!(d.phase_offset.is_finite());
            }
        }
    }

    #[test]
    fn test_phase_offsets_in_range() {
        for d in sample(&spec(Shape::Sphere { radius: 1.0 }, 1000)).unwrap() {
            assert!(d.phase_offset >= 0.0 && d.phase_offset < TAU);
        }
    }

    #[test]
    fn test_sphere_points_near_surface() {
        let radius = 2.0;
        for d in sample(&spec(Shape::Sphere { radius }, 1000)).unwrap() {
            let r = d.base_position.length();
            assert!((r - radius).abs() <= SURFACE_JITTER + 1e-4);
        }
    }

    #[test]
    fn test_helix_strands_half_turn_apart() {
        let count = 1000;
        let turns = 3.0;
        let descriptors = sample(&spec(
            Shape::Helix {
                radius: 0.5,
                height: 2.0,
                turns,
            },
            count,
        ))
        .unwrap();

        for (i, d) in descriptors.iter().enumerate() {
            let t = i as f32 / count as f32;
            let expected_strand_offset = (i % 2) as f32 * PI;
            let angle = d.base_position.z.atan2(d.base_position.x);
            let expected = (t * TAU * turns + expected_strand_offset).rem_euclid(TAU);
            let diff = (angle.rem_euclid(TAU) - expected).rem_euclid(TAU);
            // Angles match mod 2π.
            assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "i={} diff={}", i, diff);
        }
    }

    #[test]
    fn test_cube_single_point_on_edge_zero() {
        let descriptors = sample(&spec(Shape::CubeEdges { size: 2.0 }, 1)).unwrap();
        // Midpoint of edge 0 of a size-2 cube is (0, -1, -1), within jitter.
        let p = descriptors[0].base_position;
        assert!(p.x.abs() <= SURFACE_JITTER + 1e-4);
        assert!((p.y + 1.0).abs() <= SURFACE_JITTER + 1e-4);
        assert!((p.z + 1.0).abs() <= SURFACE_JITTER + 1e-4);
    }

    #[test]
    fn test_invalid_spec_rejected() {
        assert!(sample(&spec(Shape::Sphere { radius: 1.0 }, 0)).is_err());
        assert!(sample(&spec(Shape::Sphere { radius: 0.0 }, 10)).is_err());
    }
}
