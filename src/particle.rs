//! Per-particle data: immutable descriptors and per-frame transforms.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Immutable base data for one particle, created once during sampling.
///
/// A descriptor is owned exclusively by the [`crate::ParticleField`] that
/// sampled it and never mutated afterwards; per-frame motion is derived from
/// it into a [`FrameTransform`] without touching the base coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDescriptor {
    /// Resting position in shape space.
    pub base_position: Vec3,
    /// Per-particle phase offset in `[0, 2π)`, used only by the oscillator.
    pub phase_offset: f32,
}

/// Ephemeral per-frame render data for one particle.
///
/// Recomputed every frame from a [`ParticleDescriptor`] and the current
/// clock value, never persisted. The layout is GPU-ready: 16 bytes, no
/// padding, so a `&[FrameTransform]` casts directly to bytes for an
/// instance vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameTransform {
    /// World-space position for this frame.
    pub position: Vec3,
    /// Per-instance size multiplier.
    pub scale: f32,
}

impl FrameTransform {
    /// A transform at the origin with unit scale.
    pub const IDENTITY: FrameTransform = FrameTransform {
        position: Vec3::ZERO,
        scale: 1.0,
    };
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
