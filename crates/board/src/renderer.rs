//! BoardRenderer: owns the surface, the assets and the backend.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::assets::{load_assets, AssetBundle};
use crate::backend::Backend;
use crate::config::BoardConfig;
use crate::input::{MovePoller, PlayerMove};
use crate::render::{BoardView, Surface};
use crate::types::{Banner, CardView, Player};
use hotk_window::{WindowBackend, WindowOptions};

/// Draws the board through a backend and reads the players' clicks.
///
/// Every method takes `&mut self`: one renderer, one thread, one event queue.
pub struct BoardRenderer<B> {
    backend: B,
    assets: AssetBundle,
    view: BoardView,
    surface: Surface,
    poller: MovePoller,
}

impl<B: Backend> BoardRenderer<B> {
    /// Wrap an opened backend and show a blank white board.
    pub fn new(backend: B, assets: AssetBundle) -> Result<Self> {
        let mut renderer = Self {
            backend,
            assets,
            view: BoardView::default(),
            surface: Surface::board(),
            poller: MovePoller::new(),
        };
        renderer.view.clear(&mut renderer.surface);
        renderer.present()?;
        Ok(renderer)
    }

    pub fn assets(&self) -> &AssetBundle {
        &self.assets
    }

    /// The last composited frame.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Draw every card at its cell with `banner` in the footer, then present.
    ///
    /// Nothing is drawn or presented if a card has no art or is off the board.
    pub fn draw_board<C: CardView>(&mut self, cards: &[C], banner: Banner) -> Result<()> {
        self.view
            .draw_board(&mut self.surface, &self.assets, cards, banner)?;
        self.present()
    }

    /// Show the win screen for `winner`.
    pub fn display_winner(&mut self, winner: Player) -> Result<()> {
        info!("player {} wins", winner.number());
        self.view
            .draw_winner(&mut self.surface, &self.assets, winner);
        self.present()
    }

    /// Keep the current frame up for `seconds`.
    pub fn show_board(&mut self, seconds: u64) -> Result<()> {
        self.backend.pause(Duration::from_secs(seconds))
    }

    /// Block until a player clicks a card cell or closes the board.
    pub fn get_player_move(&mut self) -> Result<PlayerMove> {
        let mv = self.poller.next_move(&mut self.backend)?;
        debug!("player move: {mv:?}");
        Ok(mv)
    }

    fn present(&mut self) -> Result<()> {
        self.backend
            .present(&self.surface)
            .context("failed to present board frame")
    }
}

/// Load the assets and open the board window.
///
/// The native window can only be opened once per process.
pub fn init_board(config: &BoardConfig) -> Result<BoardRenderer<WindowBackend>> {
    let assets = load_assets(&config.assets_dir, &config.font_source()).with_context(|| {
        format!(
            "failed to load board assets from {}",
            config.assets_dir.display()
        )
    })?;

    let backend = WindowBackend::open(WindowOptions {
        icon: Some(assets.icon()),
        ..WindowOptions::default()
    })?;
    BoardRenderer::new(backend, assets)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::assets::{AssetParts, Sprite};
    use crate::input::{EventBatch, EventSource, PlatformEvent, PointerButton, ScriptedSource};
    use crate::render::{Presenter, RenderError};
    use crate::types::{Card, Rgb, BOARD_HEIGHT, BOARD_WIDTH, CARD_SIZE};

    #[derive(Default)]
    struct Recording {
        frames: Vec<Surface>,
        paused: Vec<Duration>,
        source: Option<ScriptedSource>,
    }

    impl Presenter for Recording {
        fn present(&mut self, surface: &Surface) -> Result<()> {
            self.frames.push(surface.clone());
            Ok(())
        }
    }

    impl EventSource for Recording {
        fn wait_events(&mut self, out: &mut EventBatch) -> Result<()> {
            match self.source.as_mut() {
                Some(s) => s.wait_events(out),
                None => {
                    out.push(PlatformEvent::CloseRequested);
                    Ok(())
                }
            }
        }
    }

    impl Backend for Recording {
        fn pause(&mut self, dur: Duration) -> Result<()> {
            self.paused.push(dur);
            Ok(())
        }
    }

    fn assets() -> AssetBundle {
        let mut cards = HashMap::new();
        cards.insert(
            "Ned".to_string(),
            Sprite::solid(CARD_SIZE, CARD_SIZE, Rgb::new(200, 0, 0)),
        );
        AssetBundle::from_parts(AssetParts {
            cards,
            icon: Sprite::solid(2, 2, Rgb::BLACK),
            banners: [
                Sprite::solid(10, 10, Rgb::BLACK),
                Sprite::solid(10, 10, Rgb::BLACK),
                Sprite::solid(10, 10, Rgb::BLACK),
            ],
            win_texts: [
                Sprite::solid(10, 10, Rgb::WHITE),
                Sprite::solid(12, 10, Rgb::WHITE),
            ],
            win_screen: Sprite::solid(BOARD_WIDTH, BOARD_HEIGHT, Rgb::new(0, 0, 90)),
        })
    }

    #[test]
    fn new_presents_a_white_board() {
        let r = BoardRenderer::new(Recording::default(), assets()).unwrap();
        assert_eq!(r.backend().frames.len(), 1);
        assert!(r.backend().frames[0]
            .pixels()
            .iter()
            .all(|&p| p == Rgb::WHITE.to_u32()));
    }

    #[test]
    fn failed_draw_presents_nothing() {
        let mut r = BoardRenderer::new(Recording::default(), assets()).unwrap();
        let err = r
            .draw_board(&[Card::new("Arya", 0)], Banner::Title)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::MissingCardArt { .. })
        ));
        assert_eq!(r.backend().frames.len(), 1);
    }

    #[test]
    fn show_board_pauses_the_backend() {
        let mut r = BoardRenderer::new(Recording::default(), assets()).unwrap();
        r.show_board(3).unwrap();
        assert_eq!(r.backend().paused, vec![Duration::from_secs(3)]);
    }

    #[test]
    fn moves_come_from_the_backend_queue() {
        let backend = Recording {
            source: Some(ScriptedSource::new([
                PlatformEvent::PointerDown {
                    x: 1200.0,
                    y: 1200.0,
                    button: PointerButton::Left,
                },
                PlatformEvent::PointerDown {
                    x: 50.0,
                    y: 50.0,
                    button: PointerButton::Left,
                },
            ])),
            ..Recording::default()
        };
        let mut r = BoardRenderer::new(backend, assets()).unwrap();
        assert_eq!(r.get_player_move().unwrap(), PlayerMove::Cell(0));
        assert_eq!(r.get_player_move().unwrap(), PlayerMove::Quit);
    }
}
