//! Canvas-like drawing target.
//!
//! Holds an RGBA pixel buffer and a current transform. Drawing goes through
//! the transform and anything landing outside the buffer is dropped.

use image::{Pixel, Rgba, RgbaImage};
use std::ops::{Deref, DerefMut};

/// Axis flips around an origin.
///
/// A flipped axis maps `x` to `origin_x - x`, an unflipped one to
/// `origin_x + x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transform {
    pub flip_x: bool,
    pub flip_y: bool,
    pub origin_x: i64,
    pub origin_y: i64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        flip_x: false,
        flip_y: false,
        origin_x: 0,
        origin_y: 0,
    };

    /// Mirror about the centre of a `width` x `height` area.
    pub fn mirror(horizontal: bool, vertical: bool, width: u32, height: u32) -> Self {
        Self {
            flip_x: horizontal,
            flip_y: vertical,
            origin_x: if horizontal { width as i64 } else { 0 },
            origin_y: if vertical { height as i64 } else { 0 },
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Device column covered by the user-space pixel column `x`.
    fn map_x(&self, x: i64) -> i64 {
        map_axis(self.flip_x, self.origin_x, x)
    }

    fn map_y(&self, y: i64) -> i64 {
        map_axis(self.flip_y, self.origin_y, y)
    }
}

fn map_axis(flip: bool, origin: i64, v: i64) -> i64 {
    // pixel [v, v + 1) lands on [origin - v - 1, origin - v) when flipped
    if flip { origin - v - 1 } else { origin + v }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SourceRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn full(image: &RgbaImage) -> Self {
        Self::new(0, 0, image.width(), image.height())
    }

    /// Part of the rect that actually lies inside `image`.
    fn clamp_to(self, image: &RgbaImage) -> Self {
        let x = self.x.min(image.width());
        let y = self.y.min(image.height());
        Self {
            x,
            y,
            width: self.width.min(image.width() - x),
            height: self.height.min(image.height() - y),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrawingSurface {
    pixels: RgbaImage,
    transform: Transform,
    saved: Vec<Transform>,
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            transform: Transform::IDENTITY,
            saved: vec![],
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Reallocate to `width` x `height`. Like a canvas, this also drops the
    /// pixel content and resets the transform state.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
        self.transform = Transform::IDENTITY;
        self.saved.clear();
    }

    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn save(&mut self) {
        self.saved.push(self.transform);
    }

    /// Pop the last saved transform. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    /// Install `transform` until the returned guard is dropped.
    pub fn scoped(&mut self, transform: Transform) -> TransformGuard<'_> {
        self.save();
        self.set_transform(transform);
        TransformGuard { surface: self }
    }

    /// Copy `src_rect` of `src` so its top-left corner sits at `(dx, dy)` in
    /// user space, then map through the current transform.
    ///
    /// Pixels are source-over blended. Anything outside the surface is
    /// silently clipped, negative offsets included.
    pub fn draw_image(&mut self, src: &RgbaImage, src_rect: SourceRect, dx: i64, dy: i64) {
        let rect = src_rect.clamp_to(src);
        let (width, height) = (self.width() as i64, self.height() as i64);

        for j in 0..rect.height {
            let ty = self.transform.map_y(dy + j as i64);
            if ty < 0 || ty >= height {
                continue;
            }

            for i in 0..rect.width {
                let tx = self.transform.map_x(dx + i as i64);
                if tx < 0 || tx >= width {
                    continue;
                }

                let pixel = src.get_pixel(rect.x + i, rect.y + j);
                let target = self.pixels.get_pixel_mut(tx as u32, ty as u32);
                match pixel[3] {
                    0 => {}
                    255 => *target = *pixel,
                    _ if target[3] == 0 => *target = *pixel,
                    _ => target.blend(pixel),
                }
            }
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }
}

impl From<RgbaImage> for DrawingSurface {
    fn from(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            transform: Transform::IDENTITY,
            saved: vec![],
        }
    }
}

/// Keeps a transform installed on a surface for its lifetime and puts the
/// previous one back on drop, also when unwinding.
pub struct TransformGuard<'a> {
    surface: &'a mut DrawingSurface,
}

impl Deref for TransformGuard<'_> {
    type Target = DrawingSurface;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl DerefMut for TransformGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
