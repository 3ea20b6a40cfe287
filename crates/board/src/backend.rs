//! Backend seam: something that shows frames and reports input.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::input::EventSource;
use crate::render::Presenter;
use hotk_window::WindowBackend;

/// A presenter and event source pair the renderer drives.
pub trait Backend: Presenter + EventSource {
    /// Block for `dur`.
    ///
    /// Interactive backends override this to keep servicing their platform,
    /// queueing events for the next [`EventSource::wait_events`].
    fn pause(&mut self, dur: Duration) -> Result<()> {
        thread::sleep(dur);
        Ok(())
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn pause(&mut self, dur: Duration) -> Result<()> {
        (**self).pause(dur)
    }
}

impl Backend for WindowBackend {
    fn pause(&mut self, dur: Duration) -> Result<()> {
        WindowBackend::pause(self, dur)
    }
}
