//! Per-frame oscillation: descriptors + clock -> frame transforms.
//!
//! The oscillator is stateless. Each frame it recomputes every particle's
//! position from its immutable descriptor and the externally supplied
//! elapsed time; it holds no counters of its own, so calling it twice with
//! identical inputs yields identical outputs.

use crate::particle::{FrameTransform, ParticleDescriptor};
use glam::Vec3;

/// Amplitude of the per-frame sinusoidal jitter, in shape-space units.
///
/// Applied additively to all three coordinates. Deliberately not scaled
/// per-axis: the whole field breathes and shimmers in place instead of
/// drifting in a direction.
pub const JITTER_AMPLITUDE: f32 = 0.02;

/// Compute one frame of transforms into a pre-allocated buffer.
///
/// For each descriptor,
/// `jitter = sin(elapsed_secs * speed + phase_offset) * JITTER_AMPLITUDE`
/// is added to every coordinate of the base position. Scale stays constant
/// across frames.
///
/// The output buffer is written in place every frame rather than
/// reallocated; size it once from the descriptor list and keep it until the
/// next resample.
///
/// # Panics
///
/// Panics if `out.len() != descriptors.len()`. A mismatched buffer means
/// the caller resized one side without resampling, which is a programming error,
/// not a recoverable condition.
pub fn advance_into(
    descriptors: &[ParticleDescriptor],
    elapsed_secs: f32,
    speed: f32,
    out: &mut [FrameTransform],
) {
    assert_eq!(
        descriptors.len(),
        out.len(),
        "transform buffer holds {} entries but the field has {} descriptors; \
         the buffer must be resized only by resampling",
        out.len(),
        descriptors.len(),
    );

    for (descriptor, transform) in descriptors.iter().zip(out.iter_mut()) {
        let jitter =
            (elapsed_secs * speed + descriptor.phase_offset).sin() * JITTER_AMPLITUDE;
        transform.position = descriptor.base_position + Vec3::splat(jitter);
        transform.scale = 1.0;
    }
}
