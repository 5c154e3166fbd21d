//! Back/forward navigation history.

use spyglass_types::error::{Direction, Result, SpyglassError};
use spyglass_types::location::Location;

/// Visited locations with a current-position cursor.
///
/// The sequence only grows. Recording a visit while the cursor sits
/// before the tail appends after the existing tail and leaves the
/// skipped forward entries in place -- there is no branch truncation.
/// History is session-scoped and never persisted.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    /// Entries in visit order. The same location may appear more than
    /// once when re-visited non-consecutively.
    entries: Vec<Location>,
    /// Index of the currently displayed entry, `None` until the first
    /// visit. When `Some(c)`, `c < entries.len()`.
    cursor: Option<usize>,
}

impl NavigationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page load.
    ///
    /// Every load funnels through here: typed, clicked, or re-entered
    /// via [`go_back`]/[`go_forward`]. Recording the entry already under
    /// the cursor is a no-op, which is what makes that re-entry safe.
    ///
    /// [`go_back`]: Self::go_back
    /// [`go_forward`]: Self::go_forward
    pub fn record_visit(&mut self, location: Location) {
        if let Some(c) = self.cursor
            && self.entries[c] == location
        {
            return;
        }
        self.entries.push(location);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Check if back navigation is possible.
    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Check if forward navigation is possible.
    pub fn can_go_forward(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Move the cursor back one entry and return the location to load.
    ///
    /// The caller is expected to route the returned location back
    /// through [`record_visit`](Self::record_visit), the same load path
    /// as a fresh navigation.
    pub fn go_back(&mut self) -> Result<Location> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                Ok(self.entries[c - 1].clone())
            },
            _ => Err(SpyglassError::NoHistory(Direction::Back)),
        }
    }

    /// Move the cursor forward one entry and return the location to load.
    pub fn go_forward(&mut self) -> Result<Location> {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                Ok(self.entries[c + 1].clone())
            },
            _ => Err(SpyglassError::NoHistory(Direction::Forward)),
        }
    }

    /// The currently displayed location, if any.
    pub fn current(&self) -> Option<&Location> {
        self.cursor.map(|c| &self.entries[c])
    }

    /// All recorded entries in visit order.
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Cursor index into [`entries`](Self::entries), `None` when empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first visit is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
