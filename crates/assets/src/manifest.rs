//! `characters.json`: house name -> character names.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::bundle::AssetKey;
use crate::error::AssetError;

/// Parsed character manifest.
///
/// Houses keep the order they are listed in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterManifest {
    pub houses: Vec<(String, Vec<String>)>,
}

impl CharacterManifest {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse `path`.
    ///
    /// Character names share the flat key space of the asset bundle, so a
    /// character called like a fixed asset (`icon`, `0`, `1_wins`, ...) is
    /// rejected.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&raw).map_err(|source| AssetError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(name) = manifest.reserved_name() {
            return Err(AssetError::ReservedName {
                path: path.to_path_buf(),
                name: name.to_string(),
            });
        }
        Ok(manifest)
    }

    /// Every character once, house by house, in listed order.
    pub fn characters(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.houses
            .iter()
            .flat_map(|(_, names)| names)
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// First character whose name is taken by a fixed asset key.
    pub fn reserved_name(&self) -> Option<&str> {
        self.characters()
            .into_iter()
            .find(|name| !matches!(AssetKey::parse(name), AssetKey::Card(_)))
    }
}

impl Serialize for CharacterManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.houses.len()))?;
        for (house, names) in &self.houses {
            map.serialize_entry(house, names)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CharacterManifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HousesVisitor;

        impl<'de> Visitor<'de> for HousesVisitor {
            type Value = CharacterManifest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping house names to character name lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut houses: Vec<(String, Vec<String>)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((house, names)) = access.next_entry::<String, Vec<String>>()? {
                    // A repeated key replaces the earlier entry in place.
                    match houses.iter_mut().find(|(h, _)| *h == house) {
                        Some(entry) => entry.1 = names,
                        None => houses.push((house, names)),
                    }
                }
                Ok(CharacterManifest { houses })
            }
        }

        deserializer.deserialize_map(HousesVisitor)
    }
}
