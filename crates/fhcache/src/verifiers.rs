//! Bounded directory verifier cache.
//!
//! READDIR/READDIRPLUS replies are paginated; the cookie verifier handed to
//! the client pins the directory snapshot the first page was cut from.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use fhcache_core::FileInfo;
use lru::LruCache;
use tracing::{debug, trace, warn};

struct VerifierEntry {
    handle: Vec<u8>,
    contents: Arc<[FileInfo]>,
}

/// Bounded, thread-safe map from verifier tokens to directory snapshots.
pub struct VerifierCache {
    entries: Mutex<LruCache<u64, VerifierEntry>>,
}

impl VerifierCache {
    /// Create a cache holding at most `limit` snapshots.
    #[must_use]
    pub fn new(limit: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(limit)),
        }
    }

    /// Store `contents` as the snapshot of the directory behind `handle` and
    /// return a fresh verifier for it.
    ///
    /// Tokens are random; a collision replaces the older snapshot.
    pub fn mint(&self, handle: &[u8], contents: Vec<FileInfo>) -> u64 {
        let verifier = rand::random::<u64>();
        let entry = VerifierEntry {
            handle: handle.to_vec(),
            contents: contents.into(),
        };

        match self.lock().push(verifier, entry) {
            Some((old, _)) if old == verifier => {
                debug!(verifier, "verifier collision, replaced older snapshot");
            },
            Some((evicted, _)) => trace!(verifier = evicted, "evicted directory verifier"),
            None => {},
        }
        trace!(verifier, "minted directory verifier");

        verifier
    }

    /// The snapshot for `verifier` if it was minted for `handle`.
    ///
    /// An unknown verifier and a verifier minted for another directory are
    /// both `None`.
    #[must_use]
    pub fn lookup(&self, handle: &[u8], verifier: u64) -> Option<Arc<[FileInfo]>> {
        let mut cache = self.lock();
        let Some(entry) = cache.get(&verifier) else {
            trace!(verifier, "unknown directory verifier");
            return None;
        };
        if entry.handle != handle {
            debug!(verifier, "directory verifier presented for a different handle");
            return None;
        }
        Some(Arc::clone(&entry.contents))
    }

    /// Configured capacity.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.lock().cap().get()
    }

    /// Number of live snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if no snapshots are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<u64, VerifierEntry>> {
        self.entries.lock().unwrap_or_else(|e| {
            warn!("verifier cache lock poisoned, recovering");
            e.into_inner()
        })
    }
}

impl std::fmt::Debug for VerifierCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.lock();
        f.debug_struct("VerifierCache")
            .field("len", &cache.len())
            .field("limit", &cache.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhcache_test::{test_entries, test_limit};

    #[test]
    fn test_lookup_returns_snapshot() {
        let cache = VerifierCache::new(test_limit(4));
        let snapshot = test_entries(5);
        let verifier = cache.mint(b"dir-1", snapshot.clone());

        let found = cache.lookup(b"dir-1", verifier).unwrap();
        assert_eq!(&*found, snapshot.as_slice());
    }

    #[test]
    fn test_lookup_with_other_handle_is_none() {
        let cache = VerifierCache::new(test_limit(4));
        let verifier = cache.mint(b"dir-1", test_entries(2));

        assert!(cache.lookup(b"dir-2", verifier).is_none());
        assert!(cache.lookup(b"dir-1", verifier).is_some());
    }

    #[test]
    fn test_unknown_verifier_is_none() {
        let cache = VerifierCache::new(test_limit(4));
        let verifier = cache.mint(b"dir-1", test_entries(1));
        assert!(cache.lookup(b"dir-1", verifier.wrapping_add(1)).is_none());
    }

    #[test]
    fn test_empty_snapshot_is_still_found() {
        let cache = VerifierCache::new(test_limit(4));
        let verifier = cache.mint(b"empty-dir", Vec::new());
        assert_eq!(cache.lookup(b"empty-dir", verifier).unwrap().len(), 0);
    }

    #[test]
    fn test_capacity_bound_and_eviction() {
        let cache = VerifierCache::new(test_limit(2));
        let first = cache.mint(b"d", test_entries(1));
        let second = cache.mint(b"d", test_entries(2));
        let third = cache.mint(b"d", test_entries(3));

        assert_eq!(cache.len(), 2);
        assert!(cache.lookup(b"d", first).is_none());
        assert_eq!(cache.lookup(b"d", second).unwrap().len(), 2);
        assert_eq!(cache.lookup(b"d", third).unwrap().len(), 3);
    }

    #[test]
    fn test_lookup_refreshes_recency() {
        let cache = VerifierCache::new(test_limit(2));
        let first = cache.mint(b"d", test_entries(1));
        let second = cache.mint(b"d", test_entries(2));

        assert!(cache.lookup(b"d", first).is_some());
        cache.mint(b"d", test_entries(3));

        assert!(cache.lookup(b"d", first).is_some());
        assert!(cache.lookup(b"d", second).is_none());
    }

    #[test]
    fn test_limit_accessors() {
        let cache = VerifierCache::new(test_limit(3));
        assert_eq!(cache.limit(), 3);
        assert!(cache.is_empty());
        cache.mint(b"d", Vec::new());
        assert!(!cache.is_empty());
        assert!(format!("{cache:?}").contains("VerifierCache"));
    }
}
