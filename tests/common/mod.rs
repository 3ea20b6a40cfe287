//! Shared helpers for the integration tests: fixture asset packs and a
//! backend that records instead of drawing.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use image::{Rgb as ImgRgb, RgbImage};

use hand_of_the_king::board::Backend;
use hand_of_the_king::input::{EventBatch, EventSource, PlatformEvent, PointerButton, ScriptedSource};
use hand_of_the_king::render::{Presenter, Surface};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// A temp directory removed on drop.
pub struct TempDir(PathBuf);

impl TempDir {
    pub fn new(tag: &str) -> Self {
        let n = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!("hotk-{tag}-{}-{n}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

pub fn write_jpeg(path: &Path, w: u32, h: u32, color: [u8; 3]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbImage::from_pixel(w, h, ImgRgb(color)).save(path).unwrap();
}

/// Write a complete asset pack for `houses` (house name, character names).
pub fn write_pack(root: &Path, houses: &[(&str, &[&str])]) {
    let manifest: serde_json::Map<String, serde_json::Value> = houses
        .iter()
        .map(|(house, names)| ((*house).to_string(), serde_json::json!(names)))
        .collect();
    fs::write(
        root.join("characters.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    for (i, (_, names)) in houses.iter().enumerate() {
        for (j, name) in names.iter().enumerate() {
            let shade = 40 + (i * 60 + j * 20) as u8;
            write_jpeg(&root.join("cards").join(format!("{name}.jpg")), 64, 80, [shade, 30, 30]);
        }
    }
    write_jpeg(&root.join("icons/icon.jpg"), 32, 32, [20, 20, 120]);
    write_jpeg(&root.join("backgrounds/win_screen.jpg"), 100, 100, [10, 60, 10]);
}

/// The two-house pack used across tests.
pub fn stark_lannister_pack() -> TempDir {
    let dir = TempDir::new("pack");
    write_pack(
        dir.path(),
        &[("Stark", &["Ned", "Robb"]), ("Lannister", &["Tywin"])],
    );
    dir
}

pub fn click(x: f64, y: f64) -> PlatformEvent {
    PlatformEvent::PointerDown {
        x,
        y,
        button: PointerButton::Left,
    }
}

/// Backend that keeps every presented frame and replays scripted events.
pub struct RecordingBackend {
    pub frames: Vec<Surface>,
    pub pauses: Vec<Duration>,
    pub events: ScriptedSource,
}

impl RecordingBackend {
    pub fn new(events: impl IntoIterator<Item = PlatformEvent>) -> Self {
        Self {
            frames: Vec::new(),
            pauses: Vec::new(),
            events: ScriptedSource::new(events),
        }
    }

    pub fn last_frame(&self) -> &Surface {
        self.frames.last().unwrap()
    }
}

impl Presenter for RecordingBackend {
    fn present(&mut self, surface: &Surface) -> anyhow::Result<()> {
        self.frames.push(surface.clone());
        Ok(())
    }
}

impl EventSource for RecordingBackend {
    fn wait_events(&mut self, out: &mut EventBatch) -> anyhow::Result<()> {
        self.events.wait_events(out)
    }
}

impl Backend for RecordingBackend {
    fn pause(&mut self, dur: Duration) -> anyhow::Result<()> {
        self.pauses.push(dur);
        Ok(())
    }
}
