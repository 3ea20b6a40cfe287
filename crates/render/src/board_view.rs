//! BoardView: composites cards, footer banner and win screen into a [`Surface`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use log::debug;
use thiserror::Error;

use crate::assets::{AssetBundle, Sprite};
use crate::surface::Surface;
use crate::types::{
    cell_origin, centered_origin, Banner, CardView, Player, Rgb, FOOTER_CENTER, WIN_TEXT_CENTER,
};

/// A frame could not be composited. Nothing is drawn when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no card art loaded for {name:?}")]
    MissingCardArt { name: String },

    #[error("card {name:?} has location {location}, off the board")]
    LocationOutOfRange { name: String, location: usize },
}

/// Board compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    background: Rgb,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
        }
    }
}

impl BoardView {
    pub fn new(background: Rgb) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Wipe the surface to the background color.
    pub fn clear(&self, fb: &mut Surface) {
        fb.clear(self.background);
    }

    /// Clear, draw every card at its cell, then the footer banner.
    ///
    /// Cards are validated up front, so on error the surface is untouched.
    /// When two cards share a location the later one wins.
    pub fn draw_board<C: CardView>(
        &self,
        fb: &mut Surface,
        assets: &AssetBundle,
        cards: &[C],
        banner: Banner,
    ) -> Result<(), RenderError> {
        let mut placed: Vec<(&Sprite, (u32, u32))> = Vec::with_capacity(cards.len());
        for card in cards {
            let name = card.name();
            let location = card.location();
            let origin = cell_origin(location).ok_or_else(|| RenderError::LocationOutOfRange {
                name: name.to_string(),
                location,
            })?;
            let sprite = assets.card(name).ok_or_else(|| RenderError::MissingCardArt {
                name: name.to_string(),
            })?;
            placed.push((sprite, origin));
        }

        self.clear(fb);
        for (sprite, (x, y)) in placed {
            fb.blit(sprite, x as i32, y as i32);
        }
        self.draw_footer(fb, assets, banner);

        debug!("composited {} card(s) with banner {}", cards.len(), banner.key());
        Ok(())
    }

    /// Center the banner text inside the footer strip.
    pub fn draw_footer(&self, fb: &mut Surface, assets: &AssetBundle, banner: Banner) {
        blit_centered(fb, assets.banner(banner), FOOTER_CENTER);
    }

    /// Clear, lay the win-screen background, then the winner's text.
    pub fn draw_winner(&self, fb: &mut Surface, assets: &AssetBundle, winner: Player) {
        self.clear(fb);
        fb.blit(assets.win_screen(), 0, 0);
        blit_centered(fb, assets.win_text(winner), WIN_TEXT_CENTER);
    }
}

/// Top-left corner a sprite is blitted at when centered on `center`.
pub fn centered_position(sprite: &Sprite, center: (i32, i32)) -> (i32, i32) {
    centered_origin(center, sprite.width(), sprite.height())
}

fn blit_centered(fb: &mut Surface, sprite: &Sprite, center: (i32, i32)) {
    let (x, y) = centered_position(sprite, center);
    fb.blit(sprite, x, y);
}
