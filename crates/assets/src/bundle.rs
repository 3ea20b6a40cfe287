//! The immutable asset bundle owned by the renderer.

use std::collections::HashMap;
use std::fmt;

use crate::sprite::Sprite;
use crate::types::{Banner, Player};

/// Name of an entry in the bundle.
///
/// `Display` yields the flat string keys used by the asset pack
/// (`"Ned"`, `"icon"`, `"0"`, `"1_wins"`, `"win_screen"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKey {
    Card(String),
    Icon,
    Banner(Banner),
    WinText(Player),
    WinScreen,
}

impl AssetKey {
    /// Parse a flat string key. Anything that is not a fixed key is a card;
    /// manifests may not name characters after the fixed keys.
    pub fn parse(s: &str) -> Self {
        match s {
            "icon" => AssetKey::Icon,
            "win_screen" => AssetKey::WinScreen,
            "1_wins" => AssetKey::WinText(Player::One),
            "2_wins" => AssetKey::WinText(Player::Two),
            other => match Banner::from_key(other) {
                Some(b) if b.key() == other => AssetKey::Banner(b),
                _ => AssetKey::Card(other.to_string()),
            },
        }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKey::Card(name) => f.write_str(name),
            AssetKey::Icon => f.write_str("icon"),
            AssetKey::Banner(b) => f.write_str(b.key()),
            AssetKey::WinText(p) => f.write_str(p.wins_key()),
            AssetKey::WinScreen => f.write_str("win_screen"),
        }
    }
}

/// Raw pieces of a bundle.
///
/// Banners are indexed by [`Banner::index`], win texts by [`Player::index`].
#[derive(Debug, Clone)]
pub struct AssetParts {
    pub cards: HashMap<String, Sprite>,
    pub icon: Sprite,
    pub banners: [Sprite; 3],
    pub win_texts: [Sprite; 2],
    pub win_screen: Sprite,
}

/// Pre-loaded sprites, immutable once built.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    cards: HashMap<String, Sprite>,
    icon: Sprite,
    banners: [Sprite; 3],
    win_texts: [Sprite; 2],
    win_screen: Sprite,
}

impl AssetBundle {
    pub fn from_parts(parts: AssetParts) -> Self {
        let AssetParts {
            cards,
            icon,
            banners,
            win_texts,
            win_screen,
        } = parts;
        Self {
            cards,
            icon,
            banners,
            win_texts,
            win_screen,
        }
    }

    /// Card art for a character, if the manifest listed it.
    pub fn card(&self, name: &str) -> Option<&Sprite> {
        self.cards.get(name)
    }

    pub fn icon(&self) -> &Sprite {
        &self.icon
    }

    pub fn banner(&self, banner: Banner) -> &Sprite {
        &self.banners[banner.index()]
    }

    pub fn win_text(&self, player: Player) -> &Sprite {
        &self.win_texts[player.index()]
    }

    pub fn win_screen(&self) -> &Sprite {
        &self.win_screen
    }

    /// Character names, sorted.
    pub fn card_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cards.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn get(&self, key: &AssetKey) -> Option<&Sprite> {
        match key {
            AssetKey::Card(name) => self.card(name),
            AssetKey::Icon => Some(&self.icon),
            AssetKey::Banner(b) => Some(self.banner(*b)),
            AssetKey::WinText(p) => Some(self.win_text(*p)),
            AssetKey::WinScreen => Some(&self.win_screen),
        }
    }

    /// Every key in the bundle, sorted.
    pub fn keys(&self) -> Vec<AssetKey> {
        let mut keys: Vec<AssetKey> = self
            .cards
            .keys()
            .cloned()
            .map(AssetKey::Card)
            .chain([AssetKey::Icon, AssetKey::WinScreen])
            .chain(Banner::ALL.into_iter().map(AssetKey::Banner))
            .chain(Player::ALL.into_iter().map(AssetKey::WinText))
            .collect();
        keys.sort();
        keys
    }

    /// Number of entries (cards plus the seven fixed sprites).
    pub fn len(&self) -> usize {
        self.cards.len() + 7
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
