//! Text rasterization into transparent sprites.

use ab_glyph::{point, Font, FontArc, Glyph, GlyphId, PxScale, ScaleFont};

use crate::sprite::Sprite;
use crate::types::Rgb;

/// Point size and color of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgb,
}

/// Footer banners: 20pt black.
pub const BANNER_STYLE: TextStyle = TextStyle {
    size: 20.0,
    color: Rgb::BLACK,
};

/// Win texts: 25pt white.
pub const WIN_STYLE: TextStyle = TextStyle {
    size: 25.0,
    color: Rgb::WHITE,
};

/// Render `text` on a single line.
///
/// The sprite is exactly as wide as the advance and as tall as the font's
/// line (ascent to descent), so centering it centers the line box rather than
/// the ink.
pub fn render_text(font: &FontArc, text: &str, style: TextStyle) -> Sprite {
    let scale = px_scale(font, style.size);
    let scaled = font.as_scaled(scale);
    let ascent = scaled.ascent();

    let mut caret = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    let mut glyphs: Vec<Glyph> = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, ascent)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }

    let width = caret.ceil().max(1.0) as u32;
    let height = (ascent - scaled.descent()).ceil().max(1.0) as u32;
    let mut sprite = Sprite::new(width, height);

    for glyph in glyphs {
        let Some(outlined) = font.outline_glyph(glyph) else {
            // Whitespace has no outline.
            continue;
        };
        let bounds = outlined.px_bounds();
        let (ox, oy) = (bounds.min.x as i32, bounds.min.y as i32);
        outlined.draw(|gx, gy, coverage| {
            sprite.cover(ox + gx as i32, oy + gy as i32, style.color, coverage);
        });
    }

    sprite
}

/// Point size at 72 DPI: one em spans `size` pixels.
fn px_scale(font: &FontArc, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(em) if em > 0.0 => PxScale::from(size * font.height_unscaled() / em),
        _ => PxScale::from(size),
    }
}
