// Mirrored stripes example
// Every stripe may be flipped horizontally and/or vertically

use image::{Rgba, RgbaImage};
use rand::{SeedableRng, rngs::StdRng};
use std::path::Path;
use stripe_shift::{EffectParams, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");

    let img = RgbaImage::from_fn(640, 480, |x, y| {
        if (x / 40 + y / 40) % 2 == 0 {
            Rgba([230, 60, 90, 255])
        } else {
            Rgba([40, 40, 60, 255])
        }
    });

    let params = EffectParams::new()
        .with_horizontal_rotate_enabled(true)
        .with_vertical_rotate_enabled(true);

    // fixed seed, same output on every run
    let mut session = Session::with_rng(params, StdRng::seed_from_u64(7));
    session.bind_surface();
    session.load_image(img)?;

    if let Some(surface) = session.surface() {
        let path = stripe_shift::save_png(surface, output_dir)?;
        println!("✓ Mirrored stripes effect applied successfully!");
        println!("  Effect: {}", path.display());
    }

    Ok(())
}
