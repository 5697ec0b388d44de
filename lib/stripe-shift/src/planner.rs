use crate::{StripeShiftError, StripeShiftResult, random::RandomSource};

/// One horizontal slice of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeBand {
    pub y_start: u32,
    pub height: u32,
    pub is_odd: bool,
}

/// Lazy cover of `[0, image_height)` by contiguous bands, top to bottom.
///
/// Consumed as it is iterated; planning again means calling [`plan`] again.
pub struct StripePlan<'a, R: RandomSource + ?Sized> {
    image_height: u32,
    min_height: u32,
    max_height: u32,
    next_y: u32,
    is_odd: bool,
    rng: &'a mut R,
}

/// Start planning bands for an image `image_height` pixels tall.
///
/// Band heights are uniform in `[min_height, max_height]`, the last one is
/// cut short so it ends exactly at `image_height`. A zero height image
/// yields no bands.
pub fn plan<R: RandomSource + ?Sized>(
    image_height: u32,
    min_height: u32,
    max_height: u32,
    rng: &mut R,
) -> StripeShiftResult<StripePlan<'_, R>> {
    if min_height == 0 {
        return Err(StripeShiftError::InvalidParameterRange(
            "minimum stripe height must be positive".to_string(),
        ));
    }

    if min_height > max_height {
        return Err(StripeShiftError::InvalidParameterRange(format!(
            "minimum stripe height {min_height} is greater than maximum {max_height}"
        )));
    }

    Ok(StripePlan {
        image_height,
        min_height,
        max_height,
        next_y: 0,
        is_odd: false,
        rng,
    })
}

impl<R: RandomSource + ?Sized> StripePlan<'_, R> {
    /// The random source the plan draws from, lent out between bands so
    /// per-band draws interleave with the height draws.
    pub fn rng(&mut self) -> &mut R {
        &mut *self.rng
    }
}

impl<R: RandomSource + ?Sized> Iterator for StripePlan<'_, R> {
    type Item = StripeBand;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_y >= self.image_height {
            return None;
        }

        let remaining = self.image_height - self.next_y;
        let height = self
            .rng
            .int_in(self.min_height, self.max_height)
            .min(remaining);

        let band = StripeBand {
            y_start: self.next_y,
            height,
            is_odd: self.is_odd,
        };

        self.next_y += height;
        self.is_odd = !self.is_odd;

        Some(band)
    }
}
