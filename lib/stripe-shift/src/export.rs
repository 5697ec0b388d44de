use crate::{StripeShiftResult, surface::DrawingSurface};
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const EXPORT_FILE_NAME: &str = "artShift.png";

/// PNG encoding of the surface's current pixels.
pub fn encode_png(surface: &DrawingSurface) -> StripeShiftResult<Vec<u8>> {
    let image = surface.image();
    let mut buffer = vec![];

    PngEncoder::new(&mut buffer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;

    Ok(buffer)
}

/// Write the surface to `dir/artShift.png` and return that path.
pub fn save_png(surface: &DrawingSurface, dir: impl AsRef<Path>) -> StripeShiftResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, encode_png(surface)?)?;
    log::info!("saved {}", path.display());

    Ok(path)
}
