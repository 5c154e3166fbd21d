//! The normalized address string used for navigation and bookmarking.

use std::fmt;

use crate::error::{Result, SpyglassError};

/// A normalized page address.
///
/// Values are constructed only through [`Location::parse`], so every
/// `Location` in the system carries an `http://` or `https://` prefix
/// and no surrounding whitespace. Equality is exact, case-sensitive
/// string equality of the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Parse a raw user-entered address.
    ///
    /// Trims surrounding whitespace, then prepends `https://` when the
    /// input does not already start with `http://` or `https://`. Fails
    /// on empty input and on embedded whitespace -- the line-oriented
    /// bookmark file cannot represent either.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(SpyglassError::InvalidLocation(raw.to_string()));
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self(trimmed.to_string()))
        } else {
            Ok(Self(format!("https://{trimmed}")))
        }
    }

    /// The normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
