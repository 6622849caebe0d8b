//! The run-wide header cache: at-most-once parsing of shared headers.

use deplens_lexer::RawInclude;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// The extraction result for one header file.
///
/// Immutable once published into the cache; readers share it by `Arc`
/// and need no further synchronization after lookup.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    /// The raw include specifications found in the header, deduplicated
    /// by text. Resolution happens per compilation unit, since each unit
    /// has its own search directories.
    pub includes: Vec<RawInclude>,
}

impl HeaderRecord {
    /// Creates a record from extracted includes.
    pub fn new(includes: Vec<RawInclude>) -> Self {
        Self { includes }
    }

    /// A record with no includes, published for unreadable headers so
    /// the run can continue.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Shared cache mapping header paths to their extracted include sets.
///
/// A path is in one of three states: absent, scheduled (a parse is in
/// flight somewhere), or published. The transition scheduled → published
/// happens exactly once per path for the entire run, no matter how many
/// collectors request the path concurrently: the collector whose
/// [`try_schedule`](Self::try_schedule) wins is the unique one
/// responsible for enqueueing the parse; everyone else retries after the
/// next round barrier.
///
/// A single mutex guards both the scheduled set and the published map,
/// so publication is one atomic becomes-visible event and readers always
/// observe either "not yet published" or the complete, immutable record.
pub struct HeaderCache {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    published: HashMap<PathBuf, Arc<HeaderRecord>>,
    scheduled: HashSet<PathBuf>,
}

impl HeaderCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Returns the published record for `path`, if any.
    pub fn lookup(&self, path: &Path) -> Option<Arc<HeaderRecord>> {
        let inner = self.inner.lock().unwrap();
        inner.published.get(path).cloned()
    }

    /// Claims responsibility for parsing `path`.
    ///
    /// Returns `true` exactly once per unpublished path across the whole
    /// run; the winning caller must see to it that the path gets parsed
    /// and published. Returns `false` if the path is already scheduled
    /// or already published.
    pub fn try_schedule(&self, path: &Path) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.published.contains_key(path) {
            return false;
        }
        inner.scheduled.insert(path.to_path_buf())
    }

    /// Publishes the record for `path` and clears its scheduled mark.
    ///
    /// Must be called at most once per path (guaranteed by the
    /// `try_schedule` contract).
    pub fn publish(&self, path: PathBuf, record: HeaderRecord) {
        let mut inner = self.inner.lock().unwrap();
        inner.scheduled.remove(&path);
        let previous = inner.published.insert(path, Arc::new(record));
        debug_assert!(previous.is_none(), "header published twice");
    }

    /// Number of published records.
    pub fn published_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.published.len()
    }
}

impl Default for HeaderCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_absent() {
        let cache = HeaderCache::new();
        assert!(cache.lookup(Path::new("/a.h")).is_none());
        assert_eq!(cache.published_count(), 0);
    }

    #[test]
    fn schedule_then_publish() {
        let cache = HeaderCache::new();
        let path = PathBuf::from("/a.h");

        assert!(cache.try_schedule(&path));
        // Second claim loses.
        assert!(!cache.try_schedule(&path));
        assert!(cache.lookup(&path).is_none());

        cache.publish(path.clone(), HeaderRecord::new(vec![RawInclude::quoted("b.h")]));
        let record = cache.lookup(&path).unwrap();
        assert_eq!(record.includes, vec![RawInclude::quoted("b.h")]);

        // Published paths can no longer be claimed.
        assert!(!cache.try_schedule(&path));
    }

    #[test]
    fn at_most_one_claim_across_threads() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let cache = HeaderCache::new();
        let wins = AtomicUsize::new(0);
        let path = PathBuf::from("/shared.h");

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    if cache.try_schedule(&path) {
                        wins.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });

        assert_eq!(wins.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn record_is_shared_not_copied() {
        let cache = HeaderCache::new();
        let path = PathBuf::from("/a.h");
        cache.publish(path.clone(), HeaderRecord::empty());

        let first = cache.lookup(&path).unwrap();
        let second = cache.lookup(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
