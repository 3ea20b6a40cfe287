//! Pointer input module (engine-facing).
//!
//! This module is intentionally independent of any windowing library. Backends
//! translate their native events into [`PlatformEvent`]s and expose them through
//! [`EventSource`]; the [`MovePoller`] turns that stream into board moves.

pub mod map;
pub mod poller;

pub use hotk_types as types;

pub use map::{event_to_cell, pixel_to_cell, PlatformEvent, PointerButton};
pub use poller::{EventBatch, EventSource, MovePoller, PlayerMove, ScriptedSource, EVENT_BATCH};
