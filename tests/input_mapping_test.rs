use hand_of_the_king::input::{
    pixel_to_cell, MovePoller, PlatformEvent, PlayerMove, PointerButton, ScriptedSource,
};
use hand_of_the_king::types::{BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT, COLS, ROWS};

#[test]
fn every_pixel_of_the_grid_maps_row_major() {
    for y in (0..BOARD_HEIGHT).step_by(5) {
        for x in (0..BOARD_WIDTH).step_by(5) {
            let row = (y / 125) as usize;
            let col = (x / 125) as usize;
            let expected = (row < ROWS && col < COLS).then_some(row * COLS + col);
            assert_eq!(pixel_to_cell(x as f64, y as f64), expected, "({x}, {y})");
        }
    }
}

#[test]
fn clicks_below_the_last_bucket_never_yield_a_move() {
    for y in 750..BOARD_HEIGHT {
        for x in (0..BOARD_WIDTH).step_by(7) {
            assert_eq!(pixel_to_cell(x as f64, y as f64), None);
        }
    }
}

#[test]
fn cells_cover_the_whole_board() {
    let mut hit = [false; CELL_COUNT];
    for y in (0..750).step_by(25) {
        for x in (0..750).step_by(25) {
            if let Some(cell) = pixel_to_cell(x as f64, y as f64) {
                hit[cell] = true;
            }
        }
    }
    assert!(hit.iter().all(|&h| h));
}

#[test]
fn presses_resolve_in_order_across_small_batches() {
    let press = |x: f64, y: f64, button| PlatformEvent::PointerDown { x, y, button };
    let mut src = ScriptedSource::new([
        PlatformEvent::Other,
        press(0.0, 0.0, PointerButton::Left),
        press(740.0, 100.0, PointerButton::Left),
        press(300.0, 640.0, PointerButton::Right),
        press(10.0, 760.0, PointerButton::Left),
    ])
    .with_batch_size(2);
    let mut poller = MovePoller::new();

    assert_eq!(poller.next_move(&mut src).unwrap(), PlayerMove::Cell(0));
    // x = 740 folds into column 5; any button counts.
    assert_eq!(poller.next_move(&mut src).unwrap(), PlayerMove::Cell(5));
    assert_eq!(poller.next_move(&mut src).unwrap(), PlayerMove::Cell(5 * COLS + 2));
    // The footer press is skipped and the script then runs dry.
    assert_eq!(poller.next_move(&mut src).unwrap(), PlayerMove::Quit);
    assert_eq!(ROWS * COLS, CELL_COUNT);
}
