//! Render state of one editing session.
//!
//! Holds the loaded image, the drawing surface and the current parameters,
//! and re-renders from scratch whenever one of them changes.

use crate::{
    StripeShiftResult, params::EffectParams, random::RandomSource, render::render_effect,
    surface::DrawingSurface,
};
use image::RgbaImage;
use rand::rngs::ThreadRng;

/// Size of a freshly bound surface before the first image arrives.
pub const DEFAULT_SURFACE_SIZE: (u32, u32) = (600, 600);

pub struct Session<R: RandomSource = ThreadRng> {
    params: EffectParams,
    image: Option<RgbaImage>,
    surface: Option<DrawingSurface>,
    rng: R,
}

impl Session<ThreadRng> {
    pub fn new(params: EffectParams) -> Self {
        Self::with_rng(params, rand::rng())
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(params: EffectParams, rng: R) -> Self {
        Self {
            params,
            image: None,
            surface: None,
            rng,
        }
    }

    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    pub fn surface(&self) -> Option<&DrawingSurface> {
        self.surface.as_ref()
    }

    /// Mount a blank surface. Renders are skipped until one is bound.
    pub fn bind_surface(&mut self) {
        let (width, height) = DEFAULT_SURFACE_SIZE;
        self.surface = Some(DrawingSurface::new(width, height));
    }

    /// Replace the source image and render it if a surface is bound.
    pub fn load_image(&mut self, image: RgbaImage) -> StripeShiftResult<bool> {
        log::info!("load image {}x{}", image.width(), image.height());
        self.image = Some(image);
        self.render()
    }

    /// Switch to `params` and re-render.
    ///
    /// An invalid set is rejected up front: the current parameters and the
    /// last render stay as they were.
    pub fn set_params(&mut self, params: EffectParams) -> StripeShiftResult<bool> {
        params.validate()?;
        self.params = params;
        self.render()
    }

    /// Draw new random stripes with the current parameters.
    pub fn regenerate(&mut self) -> StripeShiftResult<bool> {
        self.render()
    }

    /// Pick random parameters scaled to the loaded image and re-render.
    /// Does nothing until both an image and a surface are present.
    pub fn randomize_params(&mut self) -> StripeShiftResult<bool> {
        let Some((width, height)) = self.image.as_ref().map(|img| img.dimensions()) else {
            return Ok(false);
        };

        if self.surface.is_none() {
            return Ok(false);
        }

        let params = EffectParams::random_for(width, height, &mut self.rng);
        log::debug!("randomized parameters: {params:?}");
        self.set_params(params)
    }

    /// Returns `Ok(false)` when there is nothing to draw on or nothing to draw.
    fn render(&mut self) -> StripeShiftResult<bool> {
        match (&self.image, &mut self.surface) {
            (Some(image), Some(surface)) => {
                render_effect(image, surface, &self.params, &mut self.rng)?;
                Ok(true)
            }
            _ => {
                log::debug!("skip render, image or surface not ready");
                Ok(false)
            }
        }
    }
}
