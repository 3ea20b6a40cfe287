//! Hand of the King board demo (default binary).
//!
//! Deals the manifest's characters onto the board and lets two players take
//! turns removing cards by clicking them. Whoever takes the last card wins.
//! There are no real game rules here; it drives every renderer operation.

use anyhow::Result;
use log::info;

use hand_of_the_king::board::{init_board, Backend, BoardConfig, BoardRenderer};
use hand_of_the_king::input::PlayerMove;
use hand_of_the_king::types::{Banner, Card, Player, CELL_COUNT};

const TITLE_SECS: u64 = 1;
const WIN_SECS: u64 = 3;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = BoardConfig::from_env()?.apply_args(&args)?;
    let mut board = init_board(&config)?;
    run(&mut board)
}

fn run<B: Backend>(board: &mut BoardRenderer<B>) -> Result<()> {
    let mut cards: Vec<Card> = board
        .assets()
        .card_names()
        .into_iter()
        .take(CELL_COUNT)
        .enumerate()
        .map(|(location, name)| Card::new(name, location))
        .collect();
    info!("dealt {} card(s)", cards.len());

    board.draw_board(&cards, Banner::Title)?;
    board.show_board(TITLE_SECS)?;

    let mut turn = Player::One;
    while !cards.is_empty() {
        board.draw_board(&cards, Banner::Turn(turn))?;

        let cell = match board.get_player_move()? {
            PlayerMove::Quit => return Ok(()),
            PlayerMove::Cell(cell) => cell,
        };
        let Some(taken) = cards.iter().position(|c| c.location == cell) else {
            continue;
        };
        let card = cards.remove(taken);
        info!("player {} took {}", turn.number(), card.name);

        if cards.is_empty() {
            board.display_winner(turn)?;
            board.show_board(WIN_SECS)?;
            return Ok(());
        }
        turn = turn.other();
    }
    Ok(())
}
