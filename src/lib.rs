//! # Shimmer - Procedural Particle Fields
//!
//! Decorative 3D particle fields with a simple, declarative API.
//!
//! Shimmer samples a point cloud from a configurable shape, then perturbs
//! every point each frame with a small sinusoidal jitter keyed to a
//! per-particle phase, producing the breathing, shimmering look of a
//! hand-tuned particle effect without per-shape code.
//!
//! ## Quick Start
//!
//! ```ignore
//! use shimmer::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     let field = ParticleField::new(ShapeSpec {
//!         shape: Shape::Helix { radius: 0.6, height: 2.4, turns: 4.0 },
//!         count: 3_000,
//!     })?;
//!
//!     Viewer::new(field)
//!         .with_particle_size(0.012)
//!         .with_color(Vec3::new(0.35, 0.75, 1.0))
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Shapes
//!
//! A [`ShapeSpec`] picks one of six built-in shapes and a particle count:
//!
//! | Shape | Description |
//! |-------|-------------|
//! | [`Shape::Sphere`] | Uniform distribution over a sphere surface |
//! | [`Shape::CubeEdges`] | Wireframe cube, points along its 12 edges |
//! | [`Shape::Helix`] | Two interleaved DNA-style strands |
//! | [`Shape::StarCluster`] | Three five-pointed star outlines |
//! | [`Shape::BarChart`] | Rising bars plus a diagonal trend arrow |
//! | [`Shape::NetworkCurve`] | A closed figure-eight-like loop |
//!
//! ### Fields
//!
//! A [`ParticleField`] samples its descriptors once at construction and
//! recomputes a flat [`FrameTransform`] buffer every frame:
//!
//! ```ignore
//! let mut field = ParticleField::new(spec)?.with_speed(1.5);
//! let transforms = field.advance(clock.elapsed()); // once per frame
//! ```
//!
//! The transform buffer is pre-allocated and rewritten in place; it is
//! GPU-ready (`bytemuck::Pod`, 16 bytes per particle) for instanced
//! rendering. Invalid specs are rejected with a [`ConfigError`] before any
//! particle is placed: a field either renders its full shape or not at
//! all.
//!
//! ### Rendering
//!
//! The [`Viewer`] opens a window and draws one soft-circle billboard per
//! transform. It is a convenience for demos and local tweaking; any
//! instanced renderer can consume the transform buffer directly, and the
//! core never draws pixels itself.

pub mod error;
pub mod field;
mod gpu;
pub mod oscillator;
pub mod particle;
pub mod sampler;
pub mod shape;
pub mod time;
pub mod viewer;

pub use bytemuck;
pub use error::{ConfigError, GpuError, ViewerError};
pub use field::ParticleField;
pub use glam::{Vec2, Vec3, Vec4};
pub use oscillator::{advance_into, JITTER_AMPLITUDE};
pub use particle::{FrameTransform, ParticleDescriptor};
pub use sampler::{sample, SURFACE_JITTER};
pub use shape::{Shape, ShapeSpec};
pub use time::Clock;
pub use viewer::Viewer;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use shimmer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ConfigError, ViewerError};
    pub use crate::field::ParticleField;
    pub use crate::particle::{FrameTransform, ParticleDescriptor};
    pub use crate::shape::{Shape, ShapeSpec};
    pub use crate::time::Clock;
    pub use crate::viewer::Viewer;
    pub use crate::{Vec2, Vec3, Vec4};
}
