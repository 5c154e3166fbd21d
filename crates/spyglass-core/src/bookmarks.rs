//! Bookmark store backed by a newline-delimited flat file.
//!
//! The in-memory entry list is the display order; every mutation
//! synchronously rewrites the backing file through a temporary sibling
//! and an atomic rename over the destination. A mutation that reaches
//! memory but not disk is reported through [`Persisted`], never rolled
//! back -- the caller decides whether to retry with [`BookmarkStore::flush`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use spyglass_types::error::{Result, SpyglassError};
use spyglass_types::location::Location;

/// A saved location. The location string is the entry's unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub location: Location,
}

/// Whether a mutation's file rewrite reached disk.
#[derive(Debug)]
#[must_use = "a diverged store should be reported or flushed"]
pub enum Persisted {
    /// The backing file reflects the in-memory entries.
    Synced,
    /// The in-memory mutation applied but the file write failed. The
    /// store stays usable; [`BookmarkStore::flush`] retries the write.
    Diverged(SpyglassError),
}

impl Persisted {
    /// True when the backing file was updated.
    pub fn is_synced(&self) -> bool {
        matches!(self, Persisted::Synced)
    }
}

/// Ordered, deduplicated bookmark collection synchronized with a file.
///
/// The file holds one normalized location per line, LF-terminated, no
/// header. Single-process use only; nothing here locks the file against
/// external concurrent writers.
#[derive(Debug)]
pub struct BookmarkStore {
    /// Insertion-ordered entries with pairwise-distinct locations.
    entries: Vec<Bookmark>,
    /// Backing file path.
    path: PathBuf,
}

impl BookmarkStore {
    /// Create a store over `path` with no entries loaded.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: path.into(),
        }
    }

    /// Populate the store from the backing file.
    ///
    /// A missing file is a first run and leaves the store empty; other
    /// read failures are logged and swallowed the same way. Lines that
    /// fail location parsing, and lines duplicating an entry already
    /// seen, are skipped with a warning.
    pub fn load(&mut self) {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no bookmark file at {}", self.path.display());
                return;
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}", self.path.display());
                return;
            },
        };
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Location::parse(line) {
                Ok(location) if self.exists(&location) => {
                    log::warn!("skipping duplicate bookmark line: {line}");
                },
                Ok(location) => self.entries.push(Bookmark { location }),
                Err(e) => log::warn!("skipping bookmark line: {e}"),
            }
        }
        log::debug!("loaded {} bookmarks from {}", self.entries.len(), self.path.display());
    }

    /// Set-membership test under location equality.
    pub fn exists(&self, location: &Location) -> bool {
        self.entries.iter().any(|b| b.location == *location)
    }

    /// Add a bookmark and persist it.
    ///
    /// Fails with `DuplicateBookmark` (no mutation) when the location
    /// is already present. Otherwise the entry is appended in memory and
    /// the backing file rewritten by merge-append: lines already in the
    /// file are kept verbatim in file order and only in-memory entries
    /// absent from the file are appended, so edits made outside this
    /// process survive.
    pub fn add(&mut self, location: Location) -> Result<Persisted> {
        if self.exists(&location) {
            return Err(SpyglassError::DuplicateBookmark(
                location.as_str().to_string(),
            ));
        }
        self.entries.push(Bookmark { location });
        Ok(self.persist_merge())
    }

    /// Remove a bookmark and rewrite the backing file without it.
    ///
    /// Removing an absent location is a silent no-op: nothing is
    /// written and the result is `Synced`.
    pub fn remove(&mut self, location: &Location) -> Persisted {
        let before = self.entries.len();
        self.entries.retain(|b| b.location != *location);
        if self.entries.len() == before {
            return Persisted::Synced;
        }
        // Filter the file's own lines rather than dumping memory, so
        // unrelated external edits survive the rewrite.
        let lines = match self.read_file_lines() {
            Ok(Some(lines)) => lines,
            Ok(None) => self.memory_lines(),
            Err(e) => return Persisted::Diverged(e),
        };
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| line != location.as_str())
            .collect();
        match self.write_atomic(&kept) {
            Ok(()) => Persisted::Synced,
            Err(e) => Persisted::Diverged(e),
        }
    }

    /// Rewrite the backing file from the in-memory entries alone.
    ///
    /// The recovery path after a `Diverged` mutation.
    pub fn flush(&mut self) -> Result<()> {
        let lines = self.memory_lines();
        self.write_atomic(&lines)
    }

    /// Read-only snapshot of the entries, in display order.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no bookmarks are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge the in-memory entries into the file's current lines and
    /// rewrite it.
    fn persist_merge(&self) -> Persisted {
        let file_lines = match self.read_file_lines() {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(e) => return Persisted::Diverged(e),
        };
        let mut merged = file_lines;
        for bookmark in &self.entries {
            if !merged.iter().any(|line| line == bookmark.location.as_str()) {
                merged.push(bookmark.location.as_str().to_string());
            }
        }
        match self.write_atomic(&merged) {
            Ok(()) => Persisted::Synced,
            Err(e) => Persisted::Diverged(e),
        }
    }

    /// Trimmed, non-empty lines of the backing file, or `None` when the
    /// file does not exist.
    fn read_file_lines(&self) -> Result<Option<Vec<String>>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect(),
            )),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SpyglassError::Persistence {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// The in-memory entries as file lines.
    fn memory_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|b| b.location.as_str().to_string())
            .collect()
    }

    /// Write `lines` LF-terminated through a temporary sibling, then
    /// rename it over the destination. An interruption mid-write leaves
    /// the previous file intact; there is no separate delete step.
    fn write_atomic(&self, lines: &[String]) -> Result<()> {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        let tmp = self.path.with_extension("tmp");
        let persist_err = |source| SpyglassError::Persistence {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, content).map_err(persist_err)?;
        fs::rename(&tmp, &self.path).map_err(persist_err)?;
        Ok(())
    }
}
