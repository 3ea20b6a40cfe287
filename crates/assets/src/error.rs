use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal asset loading failure.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed character manifest {}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("character {name:?} in {} collides with a fixed asset key", .path.display())]
    ReservedName { path: PathBuf, name: String },

    #[error("failed to load image {}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid font {origin}")]
    Font {
        origin: String,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}

impl AssetError {
    /// Path of the offending file, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            AssetError::Io { path, .. }
            | AssetError::Manifest { path, .. }
            | AssetError::ReservedName { path, .. }
            | AssetError::Image { path, .. } => Some(path),
            AssetError::Font { .. } => None,
        }
    }
}
