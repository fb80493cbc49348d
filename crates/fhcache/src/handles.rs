//! Bounded file handle cache.
//!
//! A handle is the 16-byte form of a random v4 UUID. The cache maps it back
//! to the filesystem and path it was minted for until capacity pressure
//! evicts it, after which it resolves as stale.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use fhcache_core::{Filesystem, NfsError, NfsResult};
use lru::LruCache;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::path::has_prefix;

/// Length in bytes of every handle minted by [`HandleCache`].
pub const HANDLE_LEN: usize = 16;

#[derive(Clone)]
struct HandleEntry {
    fs: Arc<dyn Filesystem>,
    path: Vec<String>,
}

/// Bounded, thread-safe map from opaque handles to `(filesystem, path)`.
pub struct HandleCache {
    entries: Mutex<LruCache<Uuid, HandleEntry>>,
}

impl HandleCache {
    /// Create a cache holding at most `limit` handles.
    #[must_use]
    pub fn new(limit: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(limit)),
        }
    }

    /// Mint a fresh handle for `path` within `fs`.
    ///
    /// At capacity this evicts the least recently used handle, which from
    /// then on resolves as stale.
    pub fn mint(&self, fs: &Arc<dyn Filesystem>, path: &[String]) -> Vec<u8> {
        let id = Uuid::new_v4();
        let entry = HandleEntry {
            fs: Arc::clone(fs),
            path: path.to_vec(),
        };

        if let Some((evicted, old)) = self.lock().push(id, entry) {
            trace!(handle = %evicted, path = ?old.path, "evicted file handle");
        }
        trace!(handle = %id, fs = fs.name(), ?path, "minted file handle");

        id.as_bytes().to_vec()
    }

    /// Resolve a handle to the filesystem and path it was minted for.
    ///
    /// A hit also refreshes every live handle whose path is an ancestor of
    /// (or equal to) the resolved path, oldest first, so a client walking
    /// back up the tree finds its directory handles still live.
    ///
    /// # Errors
    ///
    /// - [`NfsError::MalformedHandle`] if `handle` is not 16 bytes.
    /// - [`NfsError::StaleHandle`] if the handle is not in the cache.
    pub fn resolve(&self, handle: &[u8]) -> NfsResult<(Arc<dyn Filesystem>, Vec<String>)> {
        let id = Uuid::from_slice(handle).map_err(|e| {
            debug!(len = handle.len(), "malformed file handle");
            NfsError::MalformedHandle(e)
        })?;

        let mut cache = self.lock();
        let Some(entry) = cache.get(&id).cloned() else {
            debug!(handle = %id, "stale file handle");
            return Err(NfsError::StaleHandle);
        };

        let ancestors: Vec<Uuid> = cache
            .iter()
            .rev()
            .filter(|(_, candidate)| has_prefix(&entry.path, &candidate.path))
            .map(|(key, _)| *key)
            .collect();
        for key in &ancestors {
            cache.promote(key);
        }
        trace!(handle = %id, touched = ancestors.len(), "resolved file handle");

        Ok((entry.fs, entry.path))
    }

    /// True if `handle` is live. Does not refresh recency.
    #[must_use]
    pub fn contains(&self, handle: &[u8]) -> bool {
        Uuid::from_slice(handle).is_ok_and(|id| self.lock().contains(&id))
    }

    /// Configured capacity.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.lock().cap().get()
    }

    /// Number of live handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if no handles are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<Uuid, HandleEntry>> {
        self.entries.lock().unwrap_or_else(|e| {
            warn!("handle cache lock poisoned, recovering");
            e.into_inner()
        })
    }
}

impl std::fmt::Debug for HandleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.lock();
        f.debug_struct("HandleCache")
            .field("len", &cache.len())
            .field("limit", &cache.cap())
            .finish()
    }
}
