//! Shape configuration for particle fields.
//!
//! A [`ShapeSpec`] tells the sampler what to build: which shape, how many
//! particles, and the shape's dimensions. Specs are immutable for the
//! lifetime of a field instance; changing any parameter means building a
//! new spec and resampling the whole field.
//!
//! # Shape Kinds
//!
//! | Shape | Description |
//! |-------|-------------|
//! | [`Shape::Sphere`] | Points uniformly distributed on a sphere surface |
//! | [`Shape::CubeEdges`] | Points along the 12 edges of a wireframe cube |
//! | [`Shape::Helix`] | Two interleaved DNA-style strands |
//! | [`Shape::StarCluster`] | Three five-pointed star outlines of increasing size |
//! | [`Shape::BarChart`] | Three rising bars plus a diagonal trend arrow |
//! | [`Shape::NetworkCurve`] | A closed figure-eight-like curve |
//!
//! # Example
//!
//! ```ignore
//! let spec = ShapeSpec {
//!     shape: Shape::Helix { radius: 0.6, height: 2.4, turns: 4.0 },
//!     count: 3_000,
//! };
//! let field = ParticleField::new(spec)?;
//! ```

use crate::error::ConfigError;

/// The geometric shape a particle field is sampled from.
///
/// Each variant carries its own dimensions in shape-space units. All shapes
/// are centered at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Points uniformly distributed on a sphere surface.
    ///
    /// Uses the cosine-of-polar-angle parametrization, so points do not
    /// cluster at the poles. Each point's distance from the origin gets a
    /// small random offset for a dusty, non-mathematical look.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },

    /// Points along the 12 edges of an axis-aligned wireframe cube.
    ///
    /// The count is split into near-equal groups per edge; any remainder
    /// lands on the last edge.
    CubeEdges {
        /// Cube side length.
        size: f32,
    },

    /// Two interleaved helical strands, DNA style.
    ///
    /// Points alternate between the strands by index parity; the second
    /// strand is rotated half a turn against the first. Strand geometry is
    /// fully deterministic (no positional jitter).
    Helix {
        /// Strand radius around the vertical axis.
        radius: f32,
        /// Total height, centered on the origin.
        height: f32,
        /// Number of complete rotations over the height.
        turns: f32,
    },

    /// Three five-pointed star outlines of increasing size, offset from
    /// one another.
    ///
    /// Star silhouettes come from modulating the outline radius with
    /// `0.5 + 0.3 * sin(5 * angle)`.
    StarCluster {
        /// Radius of the largest star; the cluster spreads within roughly
        /// twice this distance.
        radius: f32,
    },

    /// Three bars of heights 1x, 2x, 3x a unit, plus a diagonal trend
    /// arrow rising across them.
    BarChart {
        /// Overall chart extent; bar heights and spacing derive from it.
        size: f32,
    },

    /// A closed curve with radius modulated by `0.5 + 0.3 * sin(2 * angle)`
    /// and height driven by `sin(2 * angle)`, giving a figure-eight-like
    /// loop.
    NetworkCurve {
        /// Base curve radius.
        radius: f32,
    },
}

impl Shape {
    /// Validate this shape's dimensions.
    ///
    /// Every dimension must be positive and finite. Invalid values are
    /// rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Shape::Sphere { radius } => check_positive("radius", radius),
            Shape::CubeEdges { size } => check_positive("size", size),
            Shape::Helix {
                radius,
                height,
                turns,
            } => {
                check_positive("radius", radius)?;
                check_positive("height", height)?;
                check_positive("turns", turns)
            }
            Shape::StarCluster { radius } => check_positive("radius", radius),
            Shape::BarChart { size } => check_positive("size", size),
            Shape::NetworkCurve { radius } => check_positive("radius", radius),
        }
    }
}

fn check_positive(param: &'static str, value: f32) -> Result<(), ConfigError> {
    // `!(value > 0.0)` also rejects NaN.
    if !(value > 0.0) || !value.is_finite() {
        return Err(ConfigError::NonPositive { param, value });
    }
    Ok(())
}

/// Full configuration for one particle field: shape plus particle count.
///
/// A change to any field invalidates the sampled descriptor list and forces
/// a full resample; see [`crate::ParticleField::set_spec`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    /// The shape to sample.
    pub shape: Shape,
    /// Number of particles to place.
    pub count: u32,
}

impl ShapeSpec {
    /// Validate the spec: count must be at least 1, dimensions positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        self.shape.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spec() {
        let spec = ShapeSpec {
            shape: Shape::Sphere { radius: 1.0 },
            count: 100,
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_zero_count_rejected() {
        let spec = ShapeSpec {
            shape: Shape::Sphere { radius: 1.0 },
            count: 0,
        };
        assert_eq!(spec.validate(), Err(ConfigError::ZeroCount));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let spec = ShapeSpec {
            shape: Shape::Sphere { radius: -1.0 },
            count: 100,
        };
        assert!(matches!(
            spec.validate(),
            Err(ConfigError::NonPositive { param: "radius", .. })
        ));
    }

    #[test]
    fn test_nan_dimension_rejected() {
        let spec = ShapeSpec {
            shape: Shape::CubeEdges { size: f32::NAN },
            count: 100,
        };
        assert!(matches!(
            spec.validate(),
            Err(ConfigError::NonPositive { param: "size", .. })
        ));
    }

    #[test]
    fn test_helix_turns_rejected() {
        let spec = ShapeSpec {
            shape: Shape::Helix {
                radius: 1.0,
                height: 2.0,
                turns: 0.0,
            },
            count: 100,
        };
        assert!(matches!(
            spec.validate(),
            Err(ConfigError::NonPositive { param: "turns", .. })
        ));
    }
}
