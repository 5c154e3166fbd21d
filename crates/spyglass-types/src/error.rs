//! Error types for SPYGLASS.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which way a history move was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Back => f.write_str("back"),
            Direction::Forward => f.write_str("forward"),
        }
    }
}

/// Errors produced by the SPYGLASS core.
///
/// None of these are fatal: the caller decides presentation. The core
/// never shows dialogs or terminates the process on error.
#[derive(Debug, thiserror::Error)]
pub enum SpyglassError {
    #[error("no {0} history")]
    NoHistory(Direction),

    #[error("bookmark already exists: {0}")]
    DuplicateBookmark(String),

    #[error("invalid location: {0:?}")]
    InvalidLocation(String),

    #[error("bookmark file {}: {source}", .path.display())]
    Persistence { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SpyglassError>;
