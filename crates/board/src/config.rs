//! Board startup configuration: defaults, environment, command line.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::assets::FontSource;

pub const ENV_ASSETS_DIR: &str = "HOTK_ASSETS_DIR";
pub const ENV_FONT: &str = "HOTK_FONT";

/// The `assets/` directory at the workspace root, fixed at build time so the
/// board finds its pack whatever the working directory.
pub const DEFAULT_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub assets_dir: PathBuf,
    /// Font file for the banners; `None` tries the system font first.
    pub font: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            font: None,
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by `HOTK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`BoardConfig::from_env`], reading variables through `lookup`.
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();
        if let Some(dir) = get(ENV_ASSETS_DIR) {
            config.assets_dir = PathBuf::from(dir);
        }
        config.font = get(ENV_FONT).map(PathBuf::from);
        Ok(config)
    }

    /// Apply `--assets` and `--font` flags (program name already stripped).
    pub fn apply_args(mut self, args: &[String]) -> Result<Self, ConfigError> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--assets" => {
                    i += 1;
                    let v = args.get(i).ok_or(ConfigError::MissingValue("--assets"))?;
                    self.assets_dir = PathBuf::from(v);
                }
                "--font" => {
                    i += 1;
                    let v = args.get(i).ok_or(ConfigError::MissingValue("--font"))?;
                    self.font = Some(PathBuf::from(v));
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn font_source(&self) -> FontSource {
        match &self.font {
            Some(path) => FontSource::File(path.clone()),
            None => FontSource::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let c = BoardConfig::from_lookup(|_| None).unwrap();
        assert_eq!(c, BoardConfig::default());
        assert_eq!(c.font_source(), FontSource::System);
    }

    #[test]
    fn default_assets_dir_ignores_the_working_directory() {
        let c = BoardConfig::default();
        assert!(c.assets_dir.is_absolute(), "{}", c.assets_dir.display());
        assert!(c.assets_dir.ends_with("assets"));
        assert!(c.assets_dir.starts_with(Path::new(env!("CARGO_MANIFEST_DIR"))));
    }

    #[test]
    fn environment_overrides_defaults() {
        let c = BoardConfig::from_lookup(|k| match k {
            ENV_ASSETS_DIR => Some(" /srv/hotk ".into()),
            ENV_FONT => Some("".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(c.assets_dir, PathBuf::from("/srv/hotk"));
        assert_eq!(c.font, None);
    }

    #[test]
    fn args_override_environment() {
        let c = BoardConfig::from_lookup(|k| (k == ENV_ASSETS_DIR).then(|| "/env".into()))
            .unwrap()
            .apply_args(&args(&["--font", "a.ttf", "--assets", "x"]))
            .unwrap();
        assert_eq!(c.font_source(), FontSource::File(PathBuf::from("a.ttf")));
        assert_eq!(c.assets_dir, PathBuf::from("x"));
    }

    #[test]
    fn arg_errors() {
        assert_eq!(
            BoardConfig::default().apply_args(&args(&["--assets"])),
            Err(ConfigError::MissingValue("--assets"))
        );
        assert_eq!(
            BoardConfig::default().apply_args(&args(&["--backend", "window"])),
            Err(ConfigError::UnknownArgument("--backend".into()))
        );
    }
}
