//! The handler contract consumed by the protocol engine.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::NfsResult;
use crate::fs::{Change, FileInfo, Filesystem};

/// MOUNT protocol status codes (RFC 1813, `mountstat3`).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountStatus {
    /// Mount succeeded.
    Ok = 0,
    /// Not owner.
    Perm = 1,
    /// No such file or directory.
    NoEnt = 2,
    /// I/O error.
    Io = 5,
    /// Permission denied.
    Access = 13,
    /// Not a directory.
    NotDir = 20,
    /// Invalid argument.
    Inval = 22,
    /// Filename too long.
    NameTooLong = 63,
    /// Operation not supported.
    NotSupp = 10004,
    /// Failure on the server.
    ServerFault = 10006,
}

/// RPC authentication flavors a mount may accept.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthFlavor {
    /// `AUTH_NONE`.
    Null = 0,
    /// `AUTH_UNIX` / `AUTH_SYS`.
    Unix = 1,
    /// `AUTH_SHORT`.
    Short = 2,
    /// `AUTH_DES`.
    Des = 3,
}

/// A MOUNT request as decoded by the protocol engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountRequest {
    /// Exported directory path requested by the client.
    pub dirpath: String,
}

impl MountRequest {
    /// Create a mount request for the given export path.
    #[must_use]
    pub fn new(dirpath: impl Into<String>) -> Self {
        Self {
            dirpath: dirpath.into(),
        }
    }
}

/// Outcome of a mount.
#[derive(Debug)]
pub struct MountResponse {
    /// Mount status.
    pub status: MountStatus,
    /// The mounted filesystem, present when `status` is [`MountStatus::Ok`].
    pub fs: Option<Arc<dyn Filesystem>>,
    /// Authentication flavors the server accepts for this mount.
    pub auth_flavors: Vec<AuthFlavor>,
}

impl MountResponse {
    /// A successful mount of `fs`.
    #[must_use]
    pub fn ok(fs: Arc<dyn Filesystem>, auth_flavors: Vec<AuthFlavor>) -> Self {
        Self {
            status: MountStatus::Ok,
            fs: Some(fs),
            auth_flavors,
        }
    }

    /// A failed mount.
    #[must_use]
    pub fn failed(status: MountStatus) -> Self {
        Self {
            status,
            fs: None,
            auth_flavors: Vec::new(),
        }
    }
}

/// Filesystem statistics for FSSTAT replies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsStat {
    /// Total size in bytes.
    pub total_size: u64,
    /// Free bytes.
    pub free_size: u64,
    /// Bytes available to the caller.
    pub available_size: u64,
    /// Total file slots.
    pub total_files: u64,
    /// Free file slots.
    pub free_files: u64,
    /// File slots available to the caller.
    pub available_files: u64,
    /// How long the client may cache these values.
    pub cache_hint: Duration,
}

/// Everything the protocol engine needs from a handler.
///
/// Handle translation (`to_handle`, `from_handle`, `handle_limit`) and
/// directory verifiers (`verifier_for`, `data_for_verifier`) are part of the
/// contract so that a wrapper such as `fhcache::CachingHandler` can answer
/// them itself while forwarding the rest.
#[async_trait]
pub trait NfsHandler: Send + Sync {
    /// Handle a MOUNT request.
    async fn mount(&self, request: &MountRequest) -> MountResponse;

    /// Attribute-change capability for `fs`, if it supports one.
    fn change(&self, fs: &Arc<dyn Filesystem>) -> Option<Arc<dyn Change>>;

    /// Filesystem statistics for `fs`.
    async fn fs_stat(&self, fs: &Arc<dyn Filesystem>) -> NfsResult<FsStat>;

    /// Represent `path` within `fs` as an opaque handle.
    fn to_handle(&self, fs: &Arc<dyn Filesystem>, path: &[String]) -> Vec<u8>;

    /// Convert an opaque handle back to the file it represents.
    ///
    /// # Errors
    ///
    /// Returns [`NfsError::MalformedHandle`](crate::NfsError::MalformedHandle)
    /// if the bytes are not a handle and
    /// [`NfsError::StaleHandle`](crate::NfsError::StaleHandle) if the handle
    /// no longer resolves.
    #[allow(clippy::wrong_self_convention)]
    fn from_handle(&self, handle: &[u8]) -> NfsResult<(Arc<dyn Filesystem>, Vec<String>)>;

    /// Tell the handler a handle refers to something that was removed.
    ///
    /// # Errors
    ///
    /// Implementation defined.
    fn invalidate_handle(&self, fs: &Arc<dyn Filesystem>, handle: &[u8]) -> NfsResult<()>;

    /// How many file handles can be held at once.
    fn handle_limit(&self) -> usize;

    /// Issue a verifier binding a directory snapshot to `handle`.
    fn verifier_for(&self, handle: &[u8], contents: Vec<FileInfo>) -> u64;

    /// The snapshot for `verifier`, if it was issued for `handle` and is
    /// still held.
    fn data_for_verifier(&self, handle: &[u8], verifier: u64) -> Option<Arc<[FileInfo]>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_mount_has_no_fs() {
        let response = MountResponse::failed(MountStatus::NoEnt);
        assert_eq!(response.status, MountStatus::NoEnt);
        assert!(response.fs.is_none());
        assert!(response.auth_flavors.is_empty());
        assert!(format!("{response:?}").contains("NoEnt"));
    }

    #[test]
    fn test_mount_request_path() {
        assert_eq!(MountRequest::new("/export").dirpath, "/export");
    }
}
