//! Session controller tying history and bookmarks to a renderer.

use spyglass_types::error::Result;
use spyglass_types::location::Location;

use crate::bookmarks::{Bookmark, BookmarkStore, Persisted};
use crate::config::ViewerConfig;
use crate::history::NavigationHistory;

/// Renderer collaborator.
///
/// Receives every location the session decides to display -- one
/// callback per page load, whether the load came from a typed address,
/// a back move, or a forward move.
pub trait NavigationSink {
    fn on_navigate(&mut self, location: &Location);
}

/// Composition seam over [`NavigationHistory`] and [`BookmarkStore`].
///
/// Every navigation funnels through the same record-then-notify path,
/// so the sink sees exactly one callback per display and the history
/// cursor stays consistent. The sink is passed per call rather than
/// owned, leaving the UI layer in control of its own lifetime.
pub struct ViewerSession {
    history: NavigationHistory,
    store: BookmarkStore,
}

impl ViewerSession {
    /// Create a session from configuration. Bookmarks are not loaded
    /// until [`load_bookmarks`](Self::load_bookmarks) is called.
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            history: NavigationHistory::new(),
            store: BookmarkStore::open(&config.bookmarks_path),
        }
    }

    /// Populate the bookmark store from its backing file. Called once
    /// at startup.
    pub fn load_bookmarks(&mut self) {
        self.store.load();
    }

    /// Navigate to a raw, possibly scheme-less address.
    pub fn open(&mut self, raw: &str, sink: &mut dyn NavigationSink) -> Result<Location> {
        let location = Location::parse(raw)?;
        self.history.record_visit(location.clone());
        sink.on_navigate(&location);
        Ok(location)
    }

    /// Go back one entry and re-display it.
    pub fn go_back(&mut self, sink: &mut dyn NavigationSink) -> Result<Location> {
        let location = self.history.go_back()?;
        // Re-entering through record_visit keeps back-navigation on the
        // same load path as a fresh visit; the cursor makes it a no-op.
        self.history.record_visit(location.clone());
        sink.on_navigate(&location);
        Ok(location)
    }

    /// Go forward one entry and re-display it.
    pub fn go_forward(&mut self, sink: &mut dyn NavigationSink) -> Result<Location> {
        let location = self.history.go_forward()?;
        self.history.record_visit(location.clone());
        sink.on_navigate(&location);
        Ok(location)
    }

    /// Check if back navigation is possible.
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Check if forward navigation is possible.
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// The currently displayed location, if any.
    pub fn current(&self) -> Option<&Location> {
        self.history.current()
    }

    /// Bookmark a raw address.
    pub fn add_bookmark(&mut self, raw: &str) -> Result<Persisted> {
        let location = Location::parse(raw)?;
        self.store.add(location)
    }

    /// Remove the bookmark for a raw address. Absent bookmarks are a
    /// no-op.
    pub fn remove_bookmark(&mut self, raw: &str) -> Result<Persisted> {
        let location = Location::parse(raw)?;
        Ok(self.store.remove(&location))
    }

    /// Current bookmark list, in display order (for menu population).
    pub fn bookmarks(&self) -> &[Bookmark] {
        self.store.bookmarks()
    }

    /// Retry persisting the bookmark store after a diverged mutation.
    pub fn flush_bookmarks(&mut self) -> Result<()> {
        self.store.flush()
    }

    /// The navigation history (read-only).
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records every displayed location.
    #[derive(Default)]
    struct RecordingSink {
        seen: Vec<String>,
    }

    impl NavigationSink for RecordingSink {
        fn on_navigate(&mut self, location: &Location) {
            self.seen.push(location.as_str().to_string());
        }
    }

    fn session_in(dir: &tempfile::TempDir) -> ViewerSession {
        let config = ViewerConfig {
            bookmarks_path: dir.path().join("bookmarks.txt"),
            ..ViewerConfig::default()
        };
        ViewerSession::new(&config)
    }

    #[test]
    fn open_records_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let mut sink = RecordingSink::default();

        let loc = session.open("example.com", &mut sink).unwrap();
        assert_eq!(loc.as_str(), "https://example.com");
        assert_eq!(session.current(), Some(&loc));
        assert_eq!(sink.seen, vec!["https://example.com"]);
    }

    #[test]
    fn invalid_address_surfaces_error_without_notify() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let mut sink = RecordingSink::default();

        assert!(session.open("   ", &mut sink).is_err());
        assert!(sink.seen.is_empty());
        assert_eq!(session.current(), None);
    }

    #[test]
    fn back_and_forward_notify_each_display() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let mut sink = RecordingSink::default();

        session.open("a.com", &mut sink).unwrap();
        session.open("b.com", &mut sink).unwrap();
        session.go_back(&mut sink).unwrap();
        session.go_forward(&mut sink).unwrap();

        assert_eq!(
            sink.seen,
            vec![
                "https://a.com",
                "https://b.com",
                "https://a.com",
                "https://b.com",
            ]
        );
        // Back/forward re-records are idempotent at the cursor.
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn back_without_history_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let mut sink = RecordingSink::default();

        assert!(!session.can_go_back());
        assert!(session.go_back(&mut sink).is_err());
        assert!(sink.seen.is_empty());
    }

    #[test]
    fn bookmarks_round_trip_through_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let outcome = session.add_bookmark("example.com").unwrap();
        assert!(outcome.is_synced());
        assert_eq!(session.bookmarks().len(), 1);
        assert_eq!(
            session.bookmarks()[0].location.as_str(),
            "https://example.com"
        );

        // A fresh session sees the persisted entry at startup.
        let mut fresh = session_in(&dir);
        fresh.load_bookmarks();
        assert_eq!(fresh.bookmarks().len(), 1);

        let outcome = fresh.remove_bookmark("example.com").unwrap();
        assert!(outcome.is_synced());
        assert!(fresh.bookmarks().is_empty());
    }

    #[test]
    fn duplicate_bookmark_surfaced_to_caller() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let _ = session.add_bookmark("example.com").unwrap();
        assert!(session.add_bookmark("example.com").is_err());
        assert_eq!(session.bookmarks().len(), 1);
    }
}
