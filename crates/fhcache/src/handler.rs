//! Caching handler wrapping another [`NfsHandler`].

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use fhcache_config::{CacheSection, ConfigError, ConfigResult};
use fhcache_core::{
    Change, FileInfo, Filesystem, FsStat, MountRequest, MountResponse, NfsHandler, NfsResult,
};
use tracing::info;

use crate::handles::HandleCache;
use crate::verifiers::VerifierCache;

/// Answers handle and verifier translation from bounded LRU caches and
/// forwards everything else to `inner` unchanged.
///
/// Handles stay valid until evicted by capacity pressure or until the
/// process exits; they do not survive restarts.
pub struct CachingHandler<H> {
    inner: H,
    handles: HandleCache,
    verifiers: VerifierCache,
}

impl<H> CachingHandler<H> {
    /// Wrap `inner` with handle and verifier caches both sized to `limit`.
    #[must_use]
    pub fn new(inner: H, limit: NonZeroUsize) -> Self {
        Self::with_verifier_limit(inner, limit, limit)
    }

    /// Wrap `inner` with a handle cache of `limit` entries and a separately
    /// sized verifier cache.
    ///
    /// Directory snapshots are much larger than handle entries, so the
    /// verifier cache is usually configured smaller.
    #[must_use]
    pub fn with_verifier_limit(inner: H, limit: NonZeroUsize, verifier_limit: NonZeroUsize) -> Self {
        info!(
            handle_limit = limit.get(),
            verifier_limit = verifier_limit.get(),
            "file handle cache ready"
        );
        Self {
            inner,
            handles: HandleCache::new(limit),
            verifiers: VerifierCache::new(verifier_limit),
        }
    }

    /// Wrap `inner` using the capacities from the `[cache]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if either capacity is zero.
    pub fn from_config(inner: H, config: &CacheSection) -> ConfigResult<Self> {
        let limit = non_zero("cache.handle_limit", config.handle_limit)?;
        let verifier_limit = non_zero("cache.verifier_limit", config.effective_verifier_limit())?;
        Ok(Self::with_verifier_limit(inner, limit, verifier_limit))
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// The handle cache.
    pub fn handles(&self) -> &HandleCache {
        &self.handles
    }

    /// The verifier cache.
    pub fn verifiers(&self) -> &VerifierCache {
        &self.verifiers
    }
}

fn non_zero(field: &str, value: usize) -> ConfigResult<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or_else(|| ConfigError::ValidationError {
        field: field.to_owned(),
        message: "cache capacity must be at least 1".to_owned(),
    })
}

#[async_trait]
impl<H: NfsHandler> NfsHandler for CachingHandler<H> {
    async fn mount(&self, request: &MountRequest) -> MountResponse {
        self.inner.mount(request).await
    }

    fn change(&self, fs: &Arc<dyn Filesystem>) -> Option<Arc<dyn Change>> {
        self.inner.change(fs)
    }

    async fn fs_stat(&self, fs: &Arc<dyn Filesystem>) -> NfsResult<FsStat> {
        self.inner.fs_stat(fs).await
    }

    fn to_handle(&self, fs: &Arc<dyn Filesystem>, path: &[String]) -> Vec<u8> {
        self.handles.mint(fs, path)
    }

    fn from_handle(&self, handle: &[u8]) -> NfsResult<(Arc<dyn Filesystem>, Vec<String>)> {
        self.handles.resolve(handle)
    }

    fn invalidate_handle(&self, fs: &Arc<dyn Filesystem>, handle: &[u8]) -> NfsResult<()> {
        self.inner.invalidate_handle(fs, handle)
    }

    fn handle_limit(&self) -> usize {
        self.handles.limit()
    }

    fn verifier_for(&self, handle: &[u8], contents: Vec<FileInfo>) -> u64 {
        self.verifiers.mint(handle, contents)
    }

    fn data_for_verifier(&self, handle: &[u8], verifier: u64) -> Option<Arc<[FileInfo]>> {
        self.verifiers.lookup(handle, verifier)
    }
}
