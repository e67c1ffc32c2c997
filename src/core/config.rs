use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::alphabet::Variant;

/// Wrap width used when no configuration file sets one.
pub const DEFAULT_WRAP: usize = 76;

/// Encoding defaults. Every field is optional so override files only need
/// to name what they change.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Alphabet generation for new output
    #[serde(default)]
    pub variant: Option<Variant>,
    /// Symbols per output line, 0 for a single line
    #[serde(default)]
    pub wrap: Option<usize>,
}

impl Settings {
    /// Fields set in `other` replace the ones in `self`.
    pub fn merge(&mut self, other: Settings) {
        if other.variant.is_some() {
            self.variant = other.variant;
        }
        if other.wrap.is_some() {
            self.wrap = other.wrap;
        }
    }
}

/// Configuration loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EcojiConfig {
    /// Encoding defaults
    #[serde(default)]
    pub settings: Settings,
    /// Files merged into this configuration, in load order
    #[serde(skip)]
    pub sources: Vec<PathBuf>,
}

impl EcojiConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in defaults bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../ecoji.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.sources.push(path.to_path_buf());
        Ok(config)
    }

    /// The user-level override file, `<config dir>/ecoji/ecoji.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ecoji").join("ecoji.toml"))
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from library)
    /// 2. `~/.config/ecoji/ecoji.toml` (user overrides)
    /// 3. `./ecoji.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key. A file that fails to
    /// parse is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(user_config_path) = Self::user_config_path() {
            config.merge_file(&user_config_path);
        }
        config.merge_file(Path::new("ecoji.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                tracing::debug!(path = %path.display(), "loaded configuration override");
                self.merge(other);
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {:?}: {}", path, e);
            }
        }
    }

    /// Merges another configuration into this one.
    pub fn merge(&mut self, other: EcojiConfig) {
        self.settings.merge(other.settings);
        self.sources.extend(other.sources);
    }

    /// Effective alphabet generation for encoding.
    pub fn variant(&self) -> Variant {
        self.settings.variant.unwrap_or_default()
    }

    /// Effective wrap width for encoding.
    pub fn wrap(&self) -> usize {
        self.settings.wrap.unwrap_or(DEFAULT_WRAP)
    }
}
