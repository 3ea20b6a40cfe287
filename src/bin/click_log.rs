//! Prints the cell index of every accepted click until the board is closed.
//!
//! Handy for checking the click mapping by hand.

use anyhow::Result;

use hand_of_the_king::board::{init_board, BoardConfig};
use hand_of_the_king::input::PlayerMove;
use hand_of_the_king::types::{Banner, Card};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = BoardConfig::from_env()?.apply_args(&args)?;

    let mut board = init_board(&config)?;
    board.draw_board::<Card>(&[], Banner::Title)?;

    while let PlayerMove::Cell(cell) = board.get_player_move()? {
        println!("cell {cell}");
    }
    Ok(())
}
