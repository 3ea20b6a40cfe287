//! Board facade: everything a game loop needs.
//!
//! [`init_board`] loads the assets, opens the board window and returns a
//! [`BoardRenderer`], which draws boards, shows the win screen, pauses and
//! waits for the next player's click.

pub mod backend;
pub mod config;
pub mod renderer;

pub use hotk_assets as assets;
pub use hotk_input as input;
pub use hotk_render as render;
pub use hotk_types as types;

pub use backend::Backend;
pub use config::{BoardConfig, ConfigError};
pub use renderer::{init_board, BoardRenderer};
