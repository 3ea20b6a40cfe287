//! Copying a board surface into a window's pixel buffer.

use crate::render::Surface;
use crate::types::Rgb;

/// Copy `src` into a `dst_w x dst_h` buffer at the origin.
///
/// The buffer may be any size: the surface is clipped and whatever it does
/// not cover is painted white.
pub fn copy_frame(src: &Surface, dst: &mut [u32], dst_w: u32, dst_h: u32) {
    let dst_w = dst_w as usize;
    let rows = (dst_h as usize).min(dst.len() / dst_w.max(1));
    dst.fill(Rgb::WHITE.to_u32());

    let copy_w = dst_w.min(src.width() as usize);
    for y in 0..rows.min(src.height() as usize) {
        let Some(row) = src.row(y as u32) else {
            break;
        };
        let start = y * dst_w;
        dst[start..start + copy_w].copy_from_slice(&row[..copy_w]);
    }
}
