//! # Bar Chart Demo
//!
//! Three rising bars and a diagonal trend arrow, as a particle sketch of a
//! growth chart.
//!
//! Run with: `cargo run --example bars`

use shimmer::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let field = ParticleField::new(ShapeSpec {
        shape: Shape::BarChart { size: 1.6 },
        count: 2_000,
    })?
    .with_speed(0.8);

    Viewer::new(field)
        .with_title("shimmer - bars")
        .with_particle_size(0.012)
        .with_color(Vec3::new(0.45, 0.65, 1.0))
        .run()?;

    Ok(())
}
