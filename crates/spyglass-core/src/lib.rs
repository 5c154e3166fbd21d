//! SPYGLASS viewer core.
//!
//! Two stateful subsystems -- the back/forward [`NavigationHistory`] and
//! the file-backed [`BookmarkStore`] -- composed by [`ViewerSession`],
//! the seam a UI layer drives. The core performs no rendering and shows
//! no dialogs: every condition is a return value, and the renderer
//! collaborator is reached only through the [`NavigationSink`] trait.

pub mod bookmarks;
pub mod config;
pub mod history;
pub mod session;

pub use bookmarks::{Bookmark, BookmarkStore, Persisted};
pub use config::ViewerConfig;
pub use history::NavigationHistory;
pub use session::{NavigationSink, ViewerSession};
