//! A Game of Thrones: Hand of the King board renderer (workspace facade crate).
//!
//! Re-exports the crates under `crates/` so games only depend on this package:
//!
//! ```no_run
//! use hand_of_the_king::board::{init_board, BoardConfig};
//! use hand_of_the_king::input::PlayerMove;
//! use hand_of_the_king::types::{Banner, Card, Player};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut board = init_board(&BoardConfig::from_env()?)?;
//! board.draw_board(&[Card::new("Ned", 0)], Banner::Turn(Player::One))?;
//! if let PlayerMove::Cell(cell) = board.get_player_move()? {
//!     println!("clicked cell {cell}");
//! }
//! # Ok(())
//! # }
//! ```

pub use hotk_assets as assets;
pub use hotk_board as board;
pub use hotk_input as input;
pub use hotk_render as render;
pub use hotk_types as types;
pub use hotk_window as window;
