//! Blocking move poller.

use std::collections::VecDeque;

use anyhow::Result;
use arrayvec::ArrayVec;
use log::debug;

use crate::map::{event_to_cell, PlatformEvent};

/// Maximum number of events pulled from a backend in one go.
pub const EVENT_BATCH: usize = 32;

pub type EventBatch = ArrayVec<PlatformEvent, EVENT_BATCH>;

/// A backend's event queue.
pub trait EventSource {
    /// Block until at least one event is pending, then move as many pending
    /// events as fit into `out`, oldest first.
    fn wait_events(&mut self, out: &mut EventBatch) -> Result<()>;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn wait_events(&mut self, out: &mut EventBatch) -> Result<()> {
        (**self).wait_events(out)
    }
}

/// Result of waiting for a player's click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    /// A press landed on this cell.
    Cell(usize),
    /// The user closed the board.
    Quit,
}

/// Turns an [`EventSource`] into a stream of moves.
///
/// Events already pulled from the backend but not consumed by the previous
/// move (e.g. a second click in the same batch) are kept for the next call.
#[derive(Debug, Default)]
pub struct MovePoller {
    batch: EventBatch,
    next: usize,
}

impl MovePoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events pulled from the backend but not looked at yet.
    pub fn pending(&self) -> usize {
        self.batch.len() - self.next
    }

    /// Block until a press lands on a board cell or the user quits.
    ///
    /// Presses outside the grid and every other event are skipped silently.
    pub fn next_move<S: EventSource + ?Sized>(&mut self, source: &mut S) -> Result<PlayerMove> {
        loop {
            while self.next < self.batch.len() {
                let event = self.batch[self.next];
                self.next += 1;
                match event {
                    PlatformEvent::CloseRequested => return Ok(PlayerMove::Quit),
                    PlatformEvent::PointerDown { x, y, .. } => match event_to_cell(&event) {
                        Some(cell) => return Ok(PlayerMove::Cell(cell)),
                        None => debug!("ignoring click at ({x:.0}, {y:.0}) outside the grid"),
                    },
                    PlatformEvent::Other => {}
                }
            }

            self.batch.clear();
            self.next = 0;
            source.wait_events(&mut self.batch)?;
        }
    }
}

/// Replays a fixed list of events.
///
/// Once the script runs dry it reports [`PlatformEvent::CloseRequested`], so a
/// poller driven by it always terminates.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    events: VecDeque<PlatformEvent>,
    batch_size: usize,
}

impl ScriptedSource {
    pub fn new(events: impl IntoIterator<Item = PlatformEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            batch_size: EVENT_BATCH,
        }
    }

    /// Hand out at most `n` events per wait (at least one).
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n.clamp(1, EVENT_BATCH);
        self
    }

    pub fn push(&mut self, event: PlatformEvent) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedSource {
    fn wait_events(&mut self, out: &mut EventBatch) -> Result<()> {
        if self.events.is_empty() {
            out.push(PlatformEvent::CloseRequested);
            return Ok(());
        }
        let room = self.batch_size.min(out.remaining_capacity());
        for _ in 0..room {
            match self.events.pop_front() {
                Some(event) => out.push(event),
                None => break,
            }
        }
        Ok(())
    }
}
