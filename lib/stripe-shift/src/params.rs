use crate::{
    StripeShiftError, StripeShiftResult, random::RandomSource, render, surface::DrawingSurface,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Knobs of the stripe shift effect.
///
/// Heights and shifts are in pixels. Mirroring is decided per stripe with a
/// coin flip, the toggles only allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Derivative, Setters, Serialize, Deserialize)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct EffectParams {
    #[derivative(Default(value = "50"))]
    pub min_stripe_height: u32,

    #[derivative(Default(value = "100"))]
    pub max_stripe_height: u32,

    #[derivative(Default(value = "10"))]
    pub min_stripe_shift: u32,

    #[derivative(Default(value = "30"))]
    pub max_stripe_shift: u32,

    pub horizontal_rotate_enabled: bool,

    pub vertical_rotate_enabled: bool,
}

impl EffectParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> StripeShiftResult<()> {
        check_range("stripe height", self.min_stripe_height, self.max_stripe_height)?;
        check_range("stripe shift", self.min_stripe_shift, self.max_stripe_shift)
    }

    /// Draw a fresh parameter set scaled to an image of `width` x `height`.
    ///
    /// Upper bounds never drop below their lower bounds, so tiny images still
    /// produce a set that passes `validate`.
    pub fn random_for<R: RandomSource + ?Sized>(width: u32, height: u32, rng: &mut R) -> Self {
        let min_stripe_height = rng.int_in(1, (height / 3).max(1));
        let max_stripe_height = rng.int_in(
            min_stripe_height + 1,
            (height / 3 * 2).max(min_stripe_height + 1),
        );

        let min_stripe_shift = rng.int_in(1, (width / 5).max(1));
        let max_stripe_shift =
            rng.int_in(min_stripe_shift + 1, (width / 2).max(min_stripe_shift + 1));

        Self {
            min_stripe_height,
            max_stripe_height,
            min_stripe_shift,
            max_stripe_shift,
            vertical_rotate_enabled: rng.boolean(),
            horizontal_rotate_enabled: rng.boolean(),
        }
    }

    /// One-shot render of `image` with the thread RNG.
    pub fn apply(&self, image: &RgbaImage) -> StripeShiftResult<RgbaImage> {
        let mut surface = DrawingSurface::new(image.width(), image.height());
        render::render_effect(image, &mut surface, self, &mut rand::rng())?;
        Ok(surface.into_image())
    }
}

fn check_range(name: &str, min: u32, max: u32) -> StripeShiftResult<()> {
    if min == 0 || max == 0 {
        return Err(StripeShiftError::InvalidParameterRange(format!(
            "{name} bounds must be positive, got [{min}, {max}]"
        )));
    }

    if min > max {
        return Err(StripeShiftError::InvalidParameterRange(format!(
            "minimum {name} {min} is greater than maximum {max}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_params() {
        let params = EffectParams::new();
        assert_eq!(params.min_stripe_height, 50);
        assert_eq!(params.max_stripe_height, 100);
        assert_eq!(params.min_stripe_shift, 10);
        assert_eq!(params.max_stripe_shift, 30);
        assert!(!params.horizontal_rotate_enabled);
        assert!(!params.vertical_rotate_enabled);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_setters() {
        let params = EffectParams::new()
            .with_min_stripe_height(3)
            .with_max_stripe_height(3)
            .with_vertical_rotate_enabled(true);
        assert_eq!(params.min_stripe_height, 3);
        assert_eq!(params.max_stripe_height, 3);
        assert!(params.vertical_rotate_enabled);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let params = EffectParams::new().with_min_stripe_height(120);
        assert!(matches!(
            params.validate(),
            Err(StripeShiftError::InvalidParameterRange(_))
        ));

        let params = EffectParams::new().with_min_stripe_shift(31);
        assert!(matches!(
            params.validate(),
            Err(StripeShiftError::InvalidParameterRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_bounds() {
        for params in [
            EffectParams::new().with_min_stripe_height(0),
            EffectParams::new().with_min_stripe_shift(0),
            EffectParams::new()
                .with_min_stripe_shift(0)
                .with_max_stripe_shift(0),
        ] {
            assert!(params.validate().is_err(), "{params:?}");
        }
    }

    #[test]
    fn test_random_params_always_valid() {
        let mut rng = StdRng::seed_from_u64(11);
        for (w, h) in [(1, 1), (2, 3), (10, 10), (640, 480), (4000, 30)] {
            for _ in 0..50 {
                let params = EffectParams::random_for(w, h, &mut rng);
                assert!(params.validate().is_ok(), "{w}x{h}: {params:?}");
                assert!(params.min_stripe_height < params.max_stripe_height);
                assert!(params.min_stripe_shift < params.max_stripe_shift);
            }
        }
    }

    #[test]
    fn test_random_params_for_huge_image() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            let params = EffectParams::random_for(u32::MAX, u32::MAX, &mut rng);
            assert!(params.validate().is_ok(), "{params:?}");
            assert!(params.max_stripe_height <= u32::MAX / 3 * 2);
            assert!(params.max_stripe_shift <= u32::MAX / 2);
        }
    }

    #[test]
    fn test_random_params_scale_with_image() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let params = EffectParams::random_for(500, 300, &mut rng);
            assert!(params.min_stripe_height <= 100);
            assert!(params.max_stripe_height <= 200);
            assert!(params.min_stripe_shift <= 100);
            assert!(params.max_stripe_shift <= 250);
        }
    }
}
