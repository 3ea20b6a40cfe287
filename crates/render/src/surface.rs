//! Pixel framebuffer the board is composited into.

use crate::assets::Sprite;
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// 2D buffer of `0x00RRGGBB` pixels, row-major.
///
/// The packed layout is what softbuffer expects, so presenting a frame is a
/// row copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Black surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    /// Surface sized to the board.
    pub fn board() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.idx(x, y).map(|i| Rgb::from_u32(self.pixels[i]))
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color.to_u32();
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_u32());
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        if x >= self.width {
            return;
        }
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        let packed = color.to_u32();
        for yy in y..y_end {
            let start = (yy as usize) * (self.width as usize);
            self.pixels[start + x as usize..start + x_end as usize].fill(packed);
        }
    }

    /// Alpha-blend `sprite` with its top-left corner at `(x, y)`.
    ///
    /// The sprite is clipped against the surface, so negative or oversized
    /// positions are fine.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let (sw, sh) = sprite.size();
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x as i64 + sw as i64).min(self.width as i64);
        let y1 = (y as i64 + sh as i64).min(self.height as i64);
        if x0 as i64 >= x1 || y0 as i64 >= y1 {
            return;
        }

        for dy in y0..y1 as i32 {
            let sy = (dy - y) as u32;
            let row = (dy as usize) * (self.width as usize);
            for dx in x0..x1 as i32 {
                let sx = (dx - x) as u32;
                let Some([r, g, b, a]) = sprite.pixel(sx, sy) else {
                    continue;
                };
                let i = row + dx as usize;
                match a {
                    0 => {}
                    255 => self.pixels[i] = Rgb::new(r, g, b).to_u32(),
                    a => {
                        let dst = Rgb::from_u32(self.pixels[i]);
                        self.pixels[i] = blend(dst, Rgb::new(r, g, b), a).to_u32();
                    }
                }
            }
        }
    }
}

#[inline]
fn blend(dst: Rgb, src: Rgb, a: u8) -> Rgb {
    let mix = |d: u8, s: u8| -> u8 {
        let a = a as u32;
        ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8
    };
    Rgb::new(mix(dst.r, src.r), mix(dst.g, src.g), mix(dst.b, src.b))
}
