//! # Sphere Demo
//!
//! A dusty sphere of 8,000 shimmering particles.
//!
//! Run with: `cargo run --example sphere`

use shimmer::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let field = ParticleField::new(ShapeSpec {
        shape: Shape::Sphere { radius: 1.2 },
        count: 8_000,
    })?;

    Viewer::new(field)
        .with_title("shimmer - sphere")
        .with_particle_size(0.008)
        .with_color(Vec3::new(0.55, 0.75, 1.0))
        .run()?;

    Ok(())
}
