//! Viewer configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use spyglass_types::error::Result;

/// Runtime configuration for the viewer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Page displayed at startup.
    pub home_url: String,
    /// Backing file for the bookmark store.
    pub bookmarks_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            home_url: "https://example.com".to_string(),
            bookmarks_path: PathBuf::from("bookmarks.txt"),
        }
    }
}

impl ViewerConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file.
    ///
    /// A missing file means defaults; a malformed file is logged and
    /// also falls back to defaults.
    pub fn load(path: &Path) -> Self {
        let Ok(text) = fs::read_to_string(path) else {
            return Self::default();
        };
        match Self::from_toml_str(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid config {} -- using defaults: {e}", path.display());
                Self::default()
            },
        }
    }
}
