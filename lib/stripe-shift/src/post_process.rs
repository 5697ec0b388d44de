use crate::surface::{DrawingSurface, SourceRect};
use image::{
    Rgba, Rgba32FImage, RgbaImage,
    imageops::{self, FilterType},
};

/// Cut `left_pixels` and `right_pixels` columns off the surface and stretch
/// what is left back over the full width.
///
/// The surface keeps its dimensions. When the margins would swallow the
/// whole width each one is clamped to `width / 2 - 1` (zero for surfaces
/// narrower than 2 pixels).
pub fn trim_margins(surface: &mut DrawingSurface, left_pixels: u32, right_pixels: u32) {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let (left, right) = clamp_margins(width, left_pixels, right_pixels);
    if left == 0 && right == 0 {
        return;
    }

    let kept = width - left - right;
    let cropped = imageops::crop_imm(surface.image(), left, 0, kept, height).to_image();
    let scratch = premultiply(&cropped);
    let stretched = unpremultiply(&imageops::resize(
        &scratch,
        width,
        height,
        FilterType::Triangle,
    ));

    surface.clear();
    surface.draw_image(&stretched, SourceRect::full(&stretched), 0, 0);
}

/// Margins actually removed from a surface `width` pixels wide.
pub fn clamp_margins(width: u32, left_pixels: u32, right_pixels: u32) -> (u32, u32) {
    if u64::from(left_pixels) + u64::from(right_pixels) < u64::from(width) {
        return (left_pixels, right_pixels);
    }

    let limit = (width / 2).saturating_sub(1);
    log::warn!(
        "trim margins {left_pixels}+{right_pixels} exceed surface width {width}, \
         clamping to {limit}"
    );

    (left_pixels.min(limit), right_pixels.min(limit))
}

// Filtering straight alpha drags the colour of transparent pixels into
// their neighbours, so the stretch runs on premultiplied floats.
fn premultiply(image: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiply(image: &Rgba32FImage) -> RgbaImage {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)])
    })
}
