use crate::{
    StripeShiftResult, params::EffectParams, planner, post_process, random::RandomSource,
    renderer, surface::DrawingSurface,
};
use image::RgbaImage;

/// Full render pass of the stripe shift effect onto `surface`.
///
/// Parameters are checked before the surface is touched, so a rejected set
/// leaves the previous render in place. Every call draws new random stripes.
pub fn render_effect<R: RandomSource + ?Sized>(
    image: &RgbaImage,
    surface: &mut DrawingSurface,
    params: &EffectParams,
    rng: &mut R,
) -> StripeShiftResult<()> {
    if let Err(e) = params.validate() {
        log::warn!("reject effect parameters {params:?}: {e}");
        return Err(e);
    }

    let (width, height) = image.dimensions();
    surface.resize(width, height);
    surface.clear();

    let mut bands = planner::plan(
        height,
        params.min_stripe_height,
        params.max_stripe_height,
        rng,
    )?;

    let mut band_count = 0;
    while let Some(band) = bands.next() {
        renderer::render_band(surface, image, &band, params, bands.rng());
        band_count += 1;
    }

    post_process::trim_margins(surface, params.max_stripe_shift, params.max_stripe_shift);

    log::info!("rendered {width}x{height} image in {band_count} stripes");

    Ok(())
}
