//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic stays
//! independent of the serde schema.

mod structs;

pub use structs::{ArchiveConfig, GeneralConfig, TransportConfig};

use crate::internal;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger —
/// `#[serde(default)]` on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Severity filtering and app identity apply to all transports.
    pub general: GeneralConfig,
    /// Transport name → settings, translated 1:1 into transport instances.
    pub transports: HashMap<String, TransportConfig>,
}

impl Config {
    /// Loads configuration from the default location
    /// (`<config dir>/rotalog/rotalog.toml`).
    ///
    /// # Errors
    /// Fails if the file cannot be read or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let content = fs::read_to_string(expanded)?;
        let config = Self::from_toml(&content)?;
        internal::info(
            "CONFIG",
            &format!(
                "Config loaded: {} transport(s)",
                config.transports.len()
            ),
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `Error::ConfigParse` on a TOML syntax or schema error.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<XDG config dir>/rotalog/rotalog.toml`, or a bare relative path when
    /// no project directory can be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "rotalog").map_or_else(
            || PathBuf::from("rotalog.toml"),
            |dirs| dirs.config_dir().join("rotalog.toml"),
        )
    }
}
