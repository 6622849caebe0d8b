//! Memoized filesystem-existence checks.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A memoization layer over `Path::is_file`.
///
/// Resolution probes the same candidate paths over and over (every header
/// of a unit is tried against the same search directories), and stat
/// calls dominate the cost. Each owner (one per dependency collector)
/// keeps its own cache, so no synchronization is needed; duplicate probes
/// across collectors are accepted in exchange. The run assumes the
/// filesystem does not change mid-analysis, so entries are never
/// invalidated.
#[derive(Debug, Default)]
pub struct ExistsCache {
    entries: HashMap<PathBuf, bool>,
}

impl ExistsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a regular file exists at `path`, consulting the
    /// filesystem only on the first query for a given path.
    pub fn exists(&mut self, path: &Path) -> bool {
        if let Some(&hit) = self.entries.get(path) {
            return hit;
        }
        let exists = path.is_file();
        self.entries.insert(path.to_path_buf(), exists);
        exists
    }

    /// Number of distinct paths probed so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been probed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
