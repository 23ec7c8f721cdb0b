//! # Network Curve Demo
//!
//! A closed figure-eight-like loop of particles.
//!
//! Run with: `cargo run --example network`

use shimmer::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let field = ParticleField::new(ShapeSpec {
        shape: Shape::NetworkCurve { radius: 1.4 },
        count: 2_600,
    })?
    .with_speed(1.2);

    Viewer::new(field)
        .with_title("shimmer - network")
        .with_particle_size(0.011)
        .with_color(Vec3::new(0.85, 0.4, 0.95))
        .run()?;

    Ok(())
}
