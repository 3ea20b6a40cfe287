//! One-shot loading of the whole asset pack.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use log::{debug, info};

use crate::bundle::{AssetBundle, AssetParts};
use crate::error::AssetError;
use crate::font::FontSource;
use crate::manifest::CharacterManifest;
use crate::sprite::Sprite;
use crate::text::{render_text, BANNER_STYLE, WIN_STYLE};
use crate::types::{Banner, Player, BOARD_HEIGHT, BOARD_WIDTH, CARD_SIZE, ICON_SIZE};

/// Fixed file layout under an assets root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join("characters.json")
    }

    pub fn card(&self, character: &str) -> PathBuf {
        self.root.join("cards").join(format!("{character}.jpg"))
    }

    pub fn icon(&self) -> PathBuf {
        self.root.join("icons").join("icon.jpg")
    }

    pub fn win_screen(&self) -> PathBuf {
        self.root.join("backgrounds").join("win_screen.jpg")
    }
}

/// Load every asset under `root`.
///
/// Fails on the first missing or malformed file; nothing is returned partially.
pub fn load_assets(root: &Path, fonts: &FontSource) -> Result<AssetBundle, AssetError> {
    let paths = AssetPaths::new(root);
    let manifest = CharacterManifest::load(&paths.manifest())?;

    let mut cards = HashMap::new();
    for character in manifest.characters() {
        let sprite = load_scaled(&paths.card(character), CARD_SIZE, CARD_SIZE)?;
        debug!("loaded card art for {character}");
        cards.insert(character.to_string(), sprite);
    }

    let icon = load_scaled(&paths.icon(), ICON_SIZE, ICON_SIZE)?;

    let font = fonts.load()?;
    debug!("rendering text with {}", font.origin);
    let banners = Banner::ALL.map(|b| render_text(&font.font, b.text(), BANNER_STYLE));
    let win_texts = Player::ALL.map(|p| render_text(&font.font, p.wins_text(), WIN_STYLE));

    let win_screen = load_scaled(&paths.win_screen(), BOARD_WIDTH, BOARD_HEIGHT)?;

    info!(
        "loaded {} card(s) from {} with font {}",
        cards.len(),
        paths.root().display(),
        font.origin
    );

    Ok(AssetBundle::from_parts(AssetParts {
        cards,
        icon,
        banners,
        win_texts,
        win_screen,
    }))
}

fn load_scaled(path: &Path, width: u32, height: u32) -> Result<Sprite, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let scaled = img.resize_exact(width, height, FilterType::Triangle);
    Ok(Sprite::from_image(scaled.to_rgba8()))
}
