//! # Cube Edges Demo
//!
//! A wireframe cube traced by particles along its 12 edges.
//!
//! Run with: `cargo run --example cube`

use shimmer::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let field = ParticleField::new(ShapeSpec {
        shape: Shape::CubeEdges { size: 1.8 },
        count: 2_400,
    })?;

    Viewer::new(field)
        .with_title("shimmer - cube")
        .with_particle_size(0.012)
        .with_color(Vec3::new(1.0, 0.6, 0.25))
        .run()?;

    Ok(())
}
