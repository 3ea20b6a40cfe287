//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable from asset loading,
//! compositing, input mapping and every backend.
//!
//! # Board Layout
//!
//! The board is a fixed 6x6 grid of square cards with a status footer below:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROWS` / `COLS` | 6 | Grid dimensions |
//! | `CARD_SIZE` | 110 | Card edge in pixels |
//! | `MARGIN` | 15 | Gap between cards |
//! | `FOOTER_SIZE` | 30 | Height of the banner strip |
//! | `CELL_PITCH` | 125 | Card plus one margin |
//! | `BOARD_WIDTH` | 735 | Drawable width |
//! | `BOARD_HEIGHT` | 765 | Drawable height (grid + footer) |
//!
//! Cells are indexed row-major: `index = row * COLS + col`.
//!
//! # Examples
//!
//! ```
//! use hotk_types::{cell_at, cell_origin, Banner, Player, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(BOARD_WIDTH, 735);
//! assert_eq!(BOARD_HEIGHT, 765);
//!
//! // Pixel -> cell, including clicks in the margin after a card.
//! assert_eq!(cell_at(50, 50), Some(0));
//! assert_eq!(cell_at(120, 0), Some(0));
//! assert_eq!(cell_at(1200, 1200), None);
//!
//! // Cell -> pixel.
//! assert_eq!(cell_origin(7), Some((125, 125)));
//!
//! // Legacy string keys.
//! assert_eq!(Banner::from_key("2"), Some(Banner::Turn(Player::Two)));
//! assert_eq!(Player::Two.wins_key(), "2_wins");
//! ```

/// Number of card rows on the board.
pub const ROWS: usize = 6;

/// Number of card columns on the board.
pub const COLS: usize = 6;

/// Total number of cells (`ROWS * COLS`).
pub const CELL_COUNT: usize = ROWS * COLS;

/// Edge length of a card sprite in pixels.
pub const CARD_SIZE: u32 = 110;

/// Gap between neighbouring cards in pixels.
pub const MARGIN: u32 = 15;

/// Height of the footer banner strip in pixels.
pub const FOOTER_SIZE: u32 = 30;

/// Distance between the origins of neighbouring cells.
pub const CELL_PITCH: u32 = CARD_SIZE + MARGIN;

/// Width of the drawable board.
pub const BOARD_WIDTH: u32 = COLS as u32 * CARD_SIZE + (COLS as u32 - 1) * MARGIN;

/// Height of the drawable board, footer included.
pub const BOARD_HEIGHT: u32 = ROWS as u32 * CARD_SIZE + (ROWS as u32 - 1) * MARGIN + FOOTER_SIZE;

/// Edge length of the window icon.
pub const ICON_SIZE: u32 = 256;

/// Window (and terminal) title.
pub const WINDOW_TITLE: &str = "A Game of Thrones: Hand of the King";

/// Center of the footer banner text.
pub const FOOTER_CENTER: (i32, i32) = (
    (BOARD_WIDTH / 2) as i32,
    (BOARD_HEIGHT - FOOTER_SIZE / 2) as i32,
);

/// Center of the "Player N wins!" text on the win screen.
///
/// Offset from the board center so the text sits on the background's plaque.
pub const WIN_TEXT_CENTER: (i32, i32) = ((BOARD_WIDTH / 2) as i32 - 12, (BOARD_HEIGHT / 2) as i32 + 38);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as `0x00RRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack from `0x00RRGGBB` (the top byte is ignored).
    #[inline]
    pub const fn from_u32(v: u32) -> Self {
        Self {
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Player number as shown to users (1 or 2).
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Parse a legacy player key ("1" or "2").
    ///
    /// ```
    /// use hotk_types::Player;
    ///
    /// assert_eq!(Player::from_key("1"), Some(Player::One));
    /// assert_eq!(Player::from_key(" 2 "), Some(Player::Two));
    /// assert_eq!(Player::from_key("3"), None);
    /// ```
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Player::One),
            "2" => Some(Player::Two),
            _ => None,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index into per-player tables.
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Legacy asset key of the win text.
    pub const fn wins_key(self) -> &'static str {
        match self {
            Player::One => "1_wins",
            Player::Two => "2_wins",
        }
    }

    /// Text shown on the win screen.
    pub const fn wins_text(self) -> &'static str {
        match self {
            Player::One => "Player 1 wins!",
            Player::Two => "Player 2 wins!",
        }
    }
}

/// Footer banner selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Banner {
    /// Game title, shown before the first turn.
    Title,
    /// "Player N's turn".
    Turn(Player),
}

impl Banner {
    pub const ALL: [Banner; 3] = [
        Banner::Title,
        Banner::Turn(Player::One),
        Banner::Turn(Player::Two),
    ];

    /// Legacy asset key ("0", "1" or "2").
    pub const fn key(self) -> &'static str {
        match self {
            Banner::Title => "0",
            Banner::Turn(Player::One) => "1",
            Banner::Turn(Player::Two) => "2",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim() {
            "0" => Some(Banner::Title),
            other => Player::from_key(other).map(Banner::Turn),
        }
    }

    /// Zero-based index into banner tables (matches the legacy key).
    pub const fn index(self) -> usize {
        match self {
            Banner::Title => 0,
            Banner::Turn(Player::One) => 1,
            Banner::Turn(Player::Two) => 2,
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Banner::Title => WINDOW_TITLE,
            Banner::Turn(Player::One) => "Player 1's turn",
            Banner::Turn(Player::Two) => "Player 2's turn",
        }
    }
}

/// Read-only view of a caller-owned card.
///
/// The renderer only needs the art key and the board cell.
pub trait CardView {
    /// Character name; doubles as the asset key of the card art.
    fn name(&self) -> &str;

    /// Cell index in `0..CELL_COUNT`.
    fn location(&self) -> usize;
}

impl<T: CardView + ?Sized> CardView for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn location(&self) -> usize {
        (**self).location()
    }
}

/// Plain card value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub name: String,
    pub location: usize,
}

impl Card {
    pub fn new(name: impl Into<String>, location: usize) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

impl CardView for Card {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> usize {
        self.location
    }
}

/// Top-left pixel of a cell, or `None` when the index is off the board.
pub const fn cell_origin(location: usize) -> Option<(u32, u32)> {
    if location >= CELL_COUNT {
        return None;
    }
    let row = (location / COLS) as u32;
    let col = (location % COLS) as u32;
    Some((col * CELL_PITCH, row * CELL_PITCH))
}

/// Map a pixel to the cell whose bucket contains it.
///
/// Buckets are `CELL_PITCH` wide, so a click in the margin right of (or below)
/// a card counts for that card. Pixels left of/above the board or past the last
/// row/column (the footer strip included) map to `None`.
pub const fn cell_at(x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let col = x as usize / CELL_PITCH as usize;
    let row = y as usize / CELL_PITCH as usize;
    if row >= ROWS || col >= COLS {
        return None;
    }
    Some(row * COLS + col)
}

/// Top-left corner that centers a `w x h` block on `center`.
///
/// Integer halves, so odd sizes lean up/left by half a pixel.
pub const fn centered_origin(center: (i32, i32), w: u32, h: u32) -> (i32, i32) {
    (center.0 - (w / 2) as i32, center.1 - (h / 2) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_board_dimensions() {
        assert_eq!(CELL_PITCH, 125);
        assert_eq!(BOARD_WIDTH, 6 * 110 + 5 * 15);
        assert_eq!(BOARD_HEIGHT, 6 * 110 + 5 * 15 + 30);
        assert_eq!(CELL_COUNT, 36);
        assert_eq!(FOOTER_CENTER, (367, 750));
        assert_eq!(WIN_TEXT_CENTER, (355, 420));
    }

    #[test]
    fn every_cell_round_trips_through_its_origin() {
        for loc in 0..CELL_COUNT {
            let (x, y) = cell_origin(loc).unwrap();
            assert_eq!(x, (loc % COLS) as u32 * 125);
            assert_eq!(y, (loc / COLS) as u32 * 125);
            assert_eq!(cell_at(x as i32, y as i32), Some(loc));
            // Last pixel of the margin still belongs to the same cell.
            assert_eq!(cell_at((x + CELL_PITCH - 1) as i32, (y + CELL_PITCH - 1) as i32), Some(loc));
        }
        assert_eq!(cell_origin(CELL_COUNT), None);
    }

    #[test]
    fn clicks_outside_the_grid_are_rejected() {
        assert_eq!(cell_at(-1, 10), None);
        assert_eq!(cell_at(10, -1), None);
        // Footer strip below the last bucket.
        assert_eq!(cell_at(100, 750), None);
        assert_eq!(cell_at(100, 764), None);
        // Past the last column.
        assert_eq!(cell_at(750, 0), None);
        assert_eq!(cell_at(1200, 1200), None);
    }

    #[test]
    fn upper_footer_pixels_fold_into_the_last_row() {
        // Row 5 bucket spans 625..750, the footer starts at 735.
        assert_eq!(cell_at(0, 740), Some(30));
    }

    #[test]
    fn legacy_keys() {
        assert_eq!(Banner::Title.key(), "0");
        assert_eq!(Banner::from_key("0"), Some(Banner::Title));
        assert_eq!(Banner::from_key("1"), Some(Banner::Turn(Player::One)));
        assert_eq!(Banner::from_key("x"), None);
        for (i, b) in Banner::ALL.iter().enumerate() {
            assert_eq!(b.index(), i);
            assert_eq!(b.key(), i.to_string());
        }
        assert_eq!(Player::from_number(0), None);
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::One.wins_key(), "1_wins");
    }

    #[test]
    fn centered_origin_uses_integer_halves() {
        assert_eq!(centered_origin((100, 50), 20, 10), (90, 45));
        assert_eq!(centered_origin((100, 50), 21, 11), (90, 45));
    }

    #[test]
    fn rgb_packing() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_u32(), 0x123456);
        assert_eq!(Rgb::from_u32(0xff123456), c);
    }
}
