//! Particle field instances.
//!
//! A [`ParticleField`] ties the pieces together: it samples a descriptor
//! list from its [`ShapeSpec`] at construction, owns a pre-allocated
//! transform buffer sized exactly to the particle count, and advances the
//! oscillation once per frame. Each instance owns its data exclusively;
//! nothing is shared across fields and no synchronization is involved.
//!
//! # Example
//!
//! ```ignore
//! let mut field = ParticleField::new(ShapeSpec {
//!     shape: Shape::Sphere { radius: 1.2 },
//!     count: 5_000,
//! })?
//! .with_speed(1.5);
//!
//! // Once per frame:
//! let transforms = field.advance(clock.elapsed());
//! surface.draw_instanced(transforms);
//! ```

use crate::error::ConfigError;
use crate::oscillator;
use crate::particle::{FrameTransform, ParticleDescriptor};
use crate::sampler;
use crate::shape::ShapeSpec;

/// One particle field: an immutable descriptor list plus a reusable
/// per-frame transform buffer.
#[derive(Debug)]
pub struct ParticleField {
    spec: ShapeSpec,
    speed: f32,
    descriptors: Vec<ParticleDescriptor>,
    transforms: Vec<FrameTransform>,
}

impl ParticleField {
    /// Sample a new field from the given spec.
    ///
    /// The transform buffer is allocated once here, sized to `spec.count`,
    /// and reused for every frame afterwards.
    pub fn new(spec: ShapeSpec) -> Result<Self, ConfigError> {
        let descriptors = sampler::sample(&spec)?;
        let transforms = vec![FrameTransform::IDENTITY; descriptors.len()];

        Ok(Self {
            spec,
            speed: 1.0,
            descriptors,
            transforms,
        })
    }

    /// Set the oscillation speed multiplier (builder style).
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the oscillation speed multiplier.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Current oscillation speed multiplier.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The spec this field was sampled from.
    #[inline]
    pub fn spec(&self) -> &ShapeSpec {
        &self.spec
    }

    /// Number of particles in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the field is empty. Never true for a successfully sampled
    /// field, since zero counts are rejected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The immutable descriptor list.
    #[inline]
    pub fn descriptors(&self) -> &[ParticleDescriptor] {
        &self.descriptors
    }

    /// Replace the spec, resampling the whole field.
    ///
    /// The descriptor list and transform buffer are fully replaced, with no
    /// partial mutation, no stale indices. If the new spec is invalid the
    /// field keeps its previous state untouched and the error is returned.
    pub fn set_spec(&mut self, spec: ShapeSpec) -> Result<(), ConfigError> {
        let descriptors = sampler::sample(&spec)?;
        self.transforms = vec![FrameTransform::IDENTITY; descriptors.len()];
        self.descriptors = descriptors;
        self.spec = spec;
        Ok(())
    }

    /// Advance the oscillation to `elapsed_secs` and return the frame's
    /// transforms.
    ///
    /// Call once per rendering frame with the clock's elapsed time. The
    /// returned slice always has exactly [`len`](Self::len) entries and is
    /// valid until the next `advance` or resample.
    pub fn advance(&mut self, elapsed_secs: f32) -> &[FrameTransform] {
        oscillator::advance_into(
            &self.descriptors,
            elapsed_secs,
            self.speed,
            &mut self.transforms,
        );
        &self.transforms
    }

    /// The most recently computed transforms, without advancing.
    #[inline]
    pub fn transforms(&self) -> &[FrameTransform] {
        &self.transforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    fn sphere_spec(count: u32) -> ShapeSpec {
        ShapeSpec {
            shape: Shape::Sphere { radius: 1.0 },
            count,
        }
    }

    #[test]
    fn test_lengths_match_after_sampling() {
        let field = ParticleField::new(sphere_spec(128)).unwrap();
        assert_eq!(field.len(), 128);
        assert_eq!(field.descriptors().len(), 128);
        assert_eq!(field.transforms().len(), 128);
    }

    #[test]
    fn test_advance_returns_count_transforms() {
        let mut field = ParticleField::new(sphere_spec(64)).unwrap();
        let transforms = field.advance(0.5);
        assert_eq!(transforms.len(), 64);
    }

    #[test]
    fn test_set_spec_replaces_everything() {
        let mut field = ParticleField::new(sphere_spec(64)).unwrap();
        field
            .set_spec(ShapeSpec {
                shape: Shape::CubeEdges { size: 2.0 },
                count: 200,
            })
            .unwrap();

        assert_eq!(field.len(), 200);
        assert_eq!(field.transforms().len(), 200);
        assert_eq!(field.spec().count, 200);
    }

    #[test]
    fn test_set_spec_failure_keeps_previous_state() {
        let mut field = ParticleField::new(sphere_spec(64)).unwrap();
        let before = field.descriptors().to_vec();

        let result = field.set_spec(ShapeSpec {
            shape: Shape::Sphere { radius: -1.0 },
            count: 10,
        });

        assert!(result.is_err());
        assert_eq!(field.len(), 64);
        assert_eq!(field.descriptors(), before.as_slice());
        assert_eq!(field.spec().count, 64);
    }

    #[test]
    fn test_advance_does_not_mutate_descriptors() {
        let mut field = ParticleField::new(sphere_spec(32)).unwrap();
        let before = field.descriptors().to_vec();
        field.advance(1.0);
        field.advance(2.0);
        assert_eq!(field.descriptors(), before.as_slice());
    }
}
