use crate::{
    params::EffectParams,
    planner::StripeBand,
    random::RandomSource,
    surface::{DrawingSurface, SourceRect, Transform},
};
use image::RgbaImage;

/// What [`render_band`] decided for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandPlacement {
    pub shift: i64,
    pub dest_y: i64,
    pub horizontal_flip: bool,
    pub vertical_flip: bool,
}

/// Signed shift for a band: magnitude uniform in the shift range, pointing
/// left for odd bands and right for even ones.
pub fn stripe_shift<R: RandomSource + ?Sized>(
    is_odd: bool,
    params: &EffectParams,
    rng: &mut R,
) -> i64 {
    let magnitude = rng.int_in(params.min_stripe_shift, params.max_stripe_shift) as i64;
    if is_odd { -magnitude } else { magnitude }
}

/// Independent coin flips for the horizontal and vertical mirror. A disabled
/// axis never flips and consumes no draw.
pub fn mirror_flags<R: RandomSource + ?Sized>(params: &EffectParams, rng: &mut R) -> (bool, bool) {
    let horizontal = params.horizontal_rotate_enabled && rng.boolean();
    let vertical = params.vertical_rotate_enabled && rng.boolean();
    (horizontal, vertical)
}

/// Draw one band of `image` onto `surface`, shifted and maybe mirrored.
///
/// The stripe always spans the full image width. With a vertical flip the
/// band is placed at its mirrored row, `height - y_start - band.height`,
/// before the flip transform is applied; the two combine so the band keeps
/// its rows but turns upside down. The mirror transform is only installed
/// for this one draw.
pub fn render_band<R: RandomSource + ?Sized>(
    surface: &mut DrawingSurface,
    image: &RgbaImage,
    band: &StripeBand,
    params: &EffectParams,
    rng: &mut R,
) -> BandPlacement {
    let (horizontal_flip, vertical_flip) = mirror_flags(params, rng);
    let shift = stripe_shift(band.is_odd, params, rng);

    let dest_y = if vertical_flip {
        image.height() as i64 - band.y_start as i64 - band.height as i64
    } else {
        band.y_start as i64
    };

    log::debug!(
        "band y={} h={} odd={} shift={shift} mirror=({horizontal_flip}, {vertical_flip})",
        band.y_start,
        band.height,
        band.is_odd
    );

    let transform = Transform::mirror(
        horizontal_flip,
        vertical_flip,
        image.width(),
        image.height(),
    );

    let mut scoped = surface.scoped(transform);
    scoped.draw_image(
        image,
        SourceRect::new(0, band.y_start, image.width(), band.height),
        shift,
        dest_y,
    );

    BandPlacement {
        shift,
        dest_y,
        horizontal_flip,
        vertical_flip,
    }
}
