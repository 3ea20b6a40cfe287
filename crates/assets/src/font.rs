//! Font resolution.
//!
//! Text is drawn in Arial when the host has it. Otherwise the UI font bundled
//! with egui (Ubuntu Light) stands in, so the renderer never depends on what
//! happens to be installed.

use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::FontArc;
use log::{debug, warn};

use crate::error::AssetError;

/// Where Arial (or a metric-compatible clone) usually lives.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/arial.ttf",
    "/usr/share/fonts/TTF/arial.ttf",
    "/usr/share/fonts/corefonts/arial.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation2/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// How to pick the text font.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FontSource {
    /// Arial from the host, falling back to the embedded font.
    #[default]
    System,
    /// A specific TTF/OTF file. Failing to load it is fatal.
    File(PathBuf),
    /// The embedded font only.
    Embedded,
}

/// Where a loaded font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontOrigin::File(path) => write!(f, "{}", path.display()),
            FontOrigin::Embedded => f.write_str("embedded Ubuntu Light"),
        }
    }
}

#[derive(Clone)]
pub struct LoadedFont {
    pub font: FontArc,
    pub origin: FontOrigin,
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFont").field("origin", &self.origin).finish()
    }
}

impl FontSource {
    pub fn load(&self) -> Result<LoadedFont, AssetError> {
        match self {
            FontSource::File(path) => load_file(path),
            FontSource::Embedded => embedded(),
            FontSource::System => {
                for candidate in SYSTEM_FONT_CANDIDATES {
                    let path = Path::new(candidate);
                    if !path.is_file() {
                        continue;
                    }
                    match load_file(path) {
                        Ok(font) => {
                            debug!("using system font {}", path.display());
                            return Ok(font);
                        }
                        Err(e) => warn!("skipping unusable system font: {e}"),
                    }
                }
                warn!("Arial not found on this host, using the embedded font");
                embedded()
            }
        }
    }
}

fn load_file(path: &Path) -> Result<LoadedFont, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let font = FontArc::try_from_vec(bytes).map_err(|source| AssetError::Font {
        origin: path.display().to_string(),
        source,
    })?;
    Ok(LoadedFont {
        font,
        origin: FontOrigin::File(path.to_path_buf()),
    })
}

fn embedded() -> Result<LoadedFont, AssetError> {
    let font = FontArc::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT).map_err(|source| {
        AssetError::Font {
            origin: FontOrigin::Embedded.to_string(),
            source,
        }
    })?;
    Ok(LoadedFont {
        font,
        origin: FontOrigin::Embedded,
    })
}
