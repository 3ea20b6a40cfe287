//! RGBA pixel blocks.

use std::fmt;

use image::{Rgba, RgbaImage};

use crate::types::Rgb;

/// Straight-alpha RGBA8 image ready for blitting.
///
/// Decoded art is fully opaque; rendered text is transparent except where
/// glyphs cover it.
#[derive(Clone, PartialEq, Eq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Fully transparent sprite.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Opaque sprite of a single color.
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([color.r, color.g, color.b, 255])),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Wrap raw row-major RGBA bytes; `None` if the length does not match.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, rgba).map(Self::from_image)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// RGBA at `(x, y)`; `None` outside the sprite.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.image.get_pixel(x, y).0)
    }

    /// Row-major RGBA bytes.
    pub fn as_rgba(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Paint `color` at `(x, y)` with the given coverage, keeping the
    /// strongest coverage seen so far. Out-of-bounds writes are dropped.
    pub(crate) fn cover(&mut self, x: i32, y: i32, color: Rgb, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        let a = px.0[3].max(alpha);
        *px = Rgba([color.r, color.g, color.b, a]);
    }

    /// True when any pixel is not fully transparent.
    pub fn has_ink(&self) -> bool {
        self.image.pixels().any(|p| p.0[3] != 0)
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
