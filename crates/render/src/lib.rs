//! Board "game renderer" module.
//!
//! Composites the board into an owned pixel [`Surface`] and leaves putting it
//! on screen to a [`Presenter`] backend (native window or terminal).
//!
//! Goals:
//! - Keep compositing pure (no I/O) so it can be unit-tested pixel by pixel
//! - Keep backends dumb: they only copy a finished surface out

pub mod board_view;
pub mod surface;

pub use hotk_assets as assets;
pub use hotk_types as types;

pub use board_view::{centered_position, BoardView, RenderError};
pub use surface::Surface;

/// Puts a finished frame on screen.
pub trait Presenter {
    fn present(&mut self, surface: &Surface) -> anyhow::Result<()>;
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, surface: &Surface) -> anyhow::Result<()> {
        (**self).present(surface)
    }
}
