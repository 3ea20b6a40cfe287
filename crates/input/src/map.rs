//! Pointer mapping from platform events to board cells.

use crate::types::cell_at;

/// Mouse button that produced a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Backend-neutral input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// A mouse button went down at surface pixel `(x, y)`.
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    /// The user asked to close the board (window close, quit key).
    CloseRequested,
    /// Anything the poller does not care about.
    Other,
}

/// Map a surface pixel to a board cell.
///
/// Non-finite and negative positions map to `None`.
pub fn pixel_to_cell(x: f64, y: f64) -> Option<usize> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    cell_at(x.floor() as i32, y.floor() as i32)
}

/// Cell selected by an event, if it is a press on the board.
///
/// Every button counts as a move.
pub fn event_to_cell(event: &PlatformEvent) -> Option<usize> {
    match *event {
        PlatformEvent::PointerDown { x, y, .. } => pixel_to_cell(x, y),
        PlatformEvent::CloseRequested | PlatformEvent::Other => None,
    }
}
