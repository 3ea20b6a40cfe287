//! Native window backend (winit + softbuffer).
//!
//! The board is drawn on the CPU into a [`Surface`](hotk_render::Surface); this
//! crate only copies finished frames into a fixed-size window and turns mouse
//! presses and close requests into [`PlatformEvent`](hotk_input::PlatformEvent)s.
//!
//! The event loop is pumped from the caller's thread instead of handing control
//! to `run_app`, so the board API stays a plain blocking call sequence.

pub mod backend;
pub mod frame;

pub use hotk_input as input;
pub use hotk_render as render;
pub use hotk_types as types;

pub use backend::{WindowBackend, WindowOptions};
pub use frame::copy_frame;
