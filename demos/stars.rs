//! # Star Cluster Demo
//!
//! Three five-pointed stars of increasing size.
//!
//! Run with: `cargo run --example stars`

use shimmer::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let field = ParticleField::new(ShapeSpec {
        shape: Shape::StarCluster { radius: 0.9 },
        count: 2_100,
    })?;

    Viewer::new(field)
        .with_title("shimmer - stars")
        .with_particle_size(0.013)
        .with_color(Vec3::new(1.0, 0.85, 0.35))
        .with_background(Vec3::new(0.03, 0.02, 0.06))
        .run()?;

    Ok(())
}
