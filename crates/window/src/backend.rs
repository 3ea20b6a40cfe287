//! WindowBackend: a fixed-size winit window presenting board surfaces.

use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context as _, Result};
use log::{debug, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Icon, Window, WindowAttributes, WindowId};

use crate::frame::copy_frame;
use crate::input::{EventBatch, EventSource, PlatformEvent, PointerButton};
use crate::render::assets::Sprite;
use crate::render::{Presenter, Surface};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, WINDOW_TITLE};

/// Pumps allowed for the platform to hand us the window before giving up.
const OPEN_ATTEMPTS: u32 = 200;
const OPEN_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

type SoftSurface = softbuffer::Surface<Arc<Window>, Arc<Window>>;

/// What the window looks like.
#[derive(Debug, Clone, Copy)]
pub struct WindowOptions<'a> {
    pub title: &'a str,
    pub icon: Option<&'a Sprite>,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowOptions<'_> {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            icon: None,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

/// Event-loop state. winit calls into this while the backend pumps.
struct BoardWindow {
    attrs: Option<WindowAttributes>,
    size: PhysicalSize<u32>,
    surface: Option<SoftSurface>,
    context: Option<softbuffer::Context<Arc<Window>>>,
    window: Option<Arc<Window>>,
    cursor: PhysicalPosition<f64>,
    pending: VecDeque<PlatformEvent>,
    frame: Option<Surface>,
    error: Option<anyhow::Error>,
}

impl BoardWindow {
    fn create(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let Some(mut attrs) = self.attrs.take() else {
            return Ok(());
        };
        if let Some(position) = centered_on_monitor(event_loop, self.size) {
            attrs = attrs.with_position(position);
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| anyhow!("failed to create board window: {e}"))?,
        );
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer context: {e}"))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer surface: {e}"))?;

        info!(
            "board window opened ({}x{})",
            self.size.width, self.size.height
        );
        self.surface = Some(surface);
        self.context = Some(context);
        self.window = Some(window);
        Ok(())
    }

    /// Copy the stored frame to the window.
    fn blit(&mut self) -> Result<()> {
        let (Some(window), Some(surface), Some(frame)) =
            (self.window.as_ref(), self.surface.as_mut(), self.frame.as_ref())
        else {
            return Ok(());
        };

        let size = window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            // Minimized.
            return Ok(());
        };
        surface
            .resize(w, h)
            .map_err(|e| anyhow!("failed to resize window buffer: {e}"))?;

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow!("failed to map window buffer: {e}"))?;
        copy_frame(frame, &mut buffer, size.width, size.height);
        buffer
            .present()
            .map_err(|e| anyhow!("failed to present window buffer: {e}"))?;
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for BoardWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            if let Err(err) = self.blit() {
                self.fail(event_loop, err);
            }
        } else if let Some(ev) = translate_window_event(&mut self.cursor, &event) {
            self.pending.push_back(ev);
        }
    }
}

/// Map one winit window event to a board event.
///
/// winit reports presses without a position, so `cursor` tracks the last
/// `CursorMoved` and presses are placed there.
pub(crate) fn translate_window_event(
    cursor: &mut PhysicalPosition<f64>,
    event: &WindowEvent,
) -> Option<PlatformEvent> {
    match event {
        WindowEvent::CloseRequested => Some(PlatformEvent::CloseRequested),
        WindowEvent::CursorMoved { position, .. } => {
            *cursor = *position;
            None
        }
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            button,
            ..
        } => Some(PlatformEvent::PointerDown {
            x: cursor.x,
            y: cursor.y,
            button: map_button(*button),
        }),
        _ => None,
    }
}

fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(n) => PointerButton::Other(n),
    }
}

fn centered_on_monitor(
    event_loop: &ActiveEventLoop,
    size: PhysicalSize<u32>,
) -> Option<PhysicalPosition<i32>> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())?;
    let area = monitor.size();
    let origin = monitor.position();
    let x = origin.x + (area.width as i32 - size.width as i32) / 2;
    let y = origin.y + (area.height as i32 - size.height as i32) / 2;
    Some(PhysicalPosition::new(x.max(origin.x), y.max(origin.y)))
}

fn icon_from_sprite(sprite: &Sprite) -> Result<Icon> {
    Icon::from_rgba(sprite.as_rgba().to_vec(), sprite.width(), sprite.height())
        .context("invalid window icon")
}

/// A native, non-resizable board window.
///
/// Only one may exist per process: winit allows a single event loop, and it
/// must live on the main thread on some platforms.
pub struct WindowBackend {
    event_loop: EventLoop<()>,
    state: BoardWindow,
    exited: bool,
}

impl WindowBackend {
    pub fn open(options: WindowOptions<'_>) -> Result<Self> {
        let event_loop =
            EventLoop::new().map_err(|e| anyhow!("failed to create event loop: {e}"))?;

        let size = PhysicalSize::new(options.width, options.height);
        let mut attrs = Window::default_attributes()
            .with_title(options.title)
            .with_inner_size(size)
            .with_resizable(false);
        if let Some(icon) = options.icon {
            attrs = attrs.with_window_icon(Some(icon_from_sprite(icon)?));
        }

        let mut backend = Self {
            event_loop,
            state: BoardWindow {
                attrs: Some(attrs),
                size,
                surface: None,
                context: None,
                window: None,
                cursor: PhysicalPosition::new(0.0, 0.0),
                pending: VecDeque::new(),
                frame: None,
                error: None,
            },
            exited: false,
        };

        for _ in 0..OPEN_ATTEMPTS {
            backend.pump(Some(OPEN_PUMP_TIMEOUT))?;
            if backend.state.window.is_some() {
                return Ok(backend);
            }
            if backend.exited {
                break;
            }
        }
        bail!("the platform never made the board window available")
    }

    fn pump(&mut self, timeout: Option<Duration>) -> Result<()> {
        if self.exited {
            return Ok(());
        }
        let status = self.event_loop.pump_app_events(timeout, &mut self.state);
        if let Some(err) = self.state.error.take() {
            self.exited = true;
            return Err(err);
        }
        if let PumpStatus::Exit(code) = status {
            debug!("event loop exited with code {code}");
            self.exited = true;
            self.state.pending.push_back(PlatformEvent::CloseRequested);
        }
        Ok(())
    }

    /// Keep the window serviced for `dur`. Presses and close requests that
    /// arrive meanwhile stay queued for the next poll.
    pub fn pause(&mut self, dur: Duration) -> Result<()> {
        let Some(deadline) = pause_deadline(Instant::now(), dur) else {
            // Too far out to represent: service the window until it closes.
            while !self.exited {
                self.pump(None)?;
            }
            return Ok(());
        };
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            if self.exited {
                std::thread::sleep(deadline - now);
                return Ok(());
            }
            self.pump(Some(deadline - now))?;
        }
    }
}

/// When a pause of `dur` starting at `now` ends, or `None` if that instant
/// is not representable.
fn pause_deadline(now: Instant, dur: Duration) -> Option<Instant> {
    now.checked_add(dur)
}

impl Presenter for WindowBackend {
    fn present(&mut self, surface: &Surface) -> Result<()> {
        match self.state.frame.as_mut() {
            Some(frame) => frame.clone_from(surface),
            None => self.state.frame = Some(surface.clone()),
        }
        self.state.blit()?;
        // Let the compositor pick the new buffer up.
        self.pump(Some(Duration::ZERO))
    }
}

impl EventSource for WindowBackend {
    fn wait_events(&mut self, out: &mut EventBatch) -> Result<()> {
        while self.state.pending.is_empty() {
            if self.exited {
                warn!("board window is gone, reporting close");
                self.state.pending.push_back(PlatformEvent::CloseRequested);
                break;
            }
            self.pump(None)?;
        }
        while !out.is_full() {
            let Some(ev) = self.state.pending.pop_front() else {
                break;
            };
            out.push(ev);
        }
        Ok(())
    }
}
