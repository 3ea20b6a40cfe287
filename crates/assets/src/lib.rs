//! Asset loading for the board renderer.
//!
//! Everything the renderer draws is prepared here once, at startup, and handed
//! over as an immutable [`AssetBundle`]:
//!
//! - card art for every character listed in `characters.json`, scaled to
//!   `CARD_SIZE x CARD_SIZE`
//! - the window icon, scaled to `ICON_SIZE x ICON_SIZE`
//! - pre-rendered footer banners and win texts
//! - the win-screen background, scaled to the board size
//!
//! # Layout on disk
//!
//! ```text
//! <root>/characters.json            {"House": ["Character", ...], ...}
//! <root>/cards/<Character>.jpg
//! <root>/icons/icon.jpg
//! <root>/backgrounds/win_screen.jpg
//! ```
//!
//! Loading is all-or-nothing: the first missing or malformed file aborts with
//! an [`AssetError`].

pub mod bundle;
pub mod error;
pub mod font;
pub mod loader;
pub mod manifest;
pub mod sprite;
pub mod text;

pub use hotk_types as types;

pub use bundle::{AssetBundle, AssetKey, AssetParts};
pub use error::AssetError;
pub use font::{FontOrigin, FontSource, LoadedFont};
pub use loader::{load_assets, AssetPaths};
pub use manifest::CharacterManifest;
pub use sprite::Sprite;
pub use text::{render_text, TextStyle, BANNER_STYLE, WIN_STYLE};
