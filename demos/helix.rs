//! # DNA Helix Demo
//!
//! Two interleaved strands winding four turns, oscillating a little faster
//! than the default.
//!
//! Run with: `cargo run --example helix`

use shimmer::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let field = ParticleField::new(ShapeSpec {
        shape: Shape::Helix {
            radius: 0.6,
            height: 2.4,
            turns: 4.0,
        },
        count: 3_000,
    })?
    .with_speed(1.4);

    Viewer::new(field)
        .with_title("shimmer - helix")
        .with_particle_size(0.012)
        .with_color(Vec3::new(0.35, 0.9, 0.6))
        .run()?;

    Ok(())
}
