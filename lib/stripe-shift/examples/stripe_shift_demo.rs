use image::{ImageReader, Rgba, RgbaImage};
use std::path::Path;
use stripe_shift::{DrawingSurface, EffectParams, render_effect, save_png};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    let img_path = Path::new("data/test.png");

    let img = if img_path.exists() {
        ImageReader::open(img_path)?.decode()?.to_rgba8()
    } else {
        gradient(800, 600)
    };

    let params = EffectParams::new()
        .with_min_stripe_height(20)
        .with_max_stripe_height(80)
        .with_min_stripe_shift(10)
        .with_max_stripe_shift(40);

    let mut surface = DrawingSurface::new(img.width(), img.height());
    render_effect(&img, &mut surface, &params, &mut rand::rng())?;
    let path = save_png(&surface, output_dir)?;

    println!("✓ Stripe shift effect applied successfully!");
    println!("  Stripe height: 20 - 80");
    println!("  Stripe shift: 10 - 40");
    println!("  Effect: {}", path.display());

    Ok(())
}

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width) as u8;
        let g = (y * 255 / height) as u8;
        let b = ((x + y) * 255 / (width + height)) as u8;
        Rgba([r, g, b, 255])
    })
}
