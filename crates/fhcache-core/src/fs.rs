//! Filesystem capabilities referenced by file handles.
//!
//! Paths are ordered segment lists from the filesystem root, so `/docs/a.txt`
//! is `["docs", "a.txt"]` and the root itself is the empty list.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::NfsResult;

/// Metadata for a single directory entry, as captured in listing snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Name of the entry within its parent directory.
    pub name: String,
    /// True if the entry is a directory.
    pub is_dir: bool,
    /// Size of the file in bytes.
    pub size: u64,
    /// Unix permission bits.
    pub mode: u32,
    /// Modification time in seconds since the UNIX epoch.
    pub mtime: u64,
}

impl FileInfo {
    /// Metadata for a regular file.
    #[must_use]
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            size,
            mode: 0o644,
            mtime: 0,
        }
    }

    /// Metadata for a directory.
    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            size: 0,
            mode: 0o755,
            mtime: 0,
        }
    }

    /// Set the modification time.
    #[must_use]
    pub fn with_mtime(mut self, mtime: u64) -> Self {
        self.mtime = mtime;
        self
    }
}

/// A path-addressed filesystem owned by the surrounding server.
///
/// Handle caches only hold `Arc` references to it; they never call into it.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Short name used in logs and mount tables.
    fn name(&self) -> &str;

    /// Get metadata for a path.
    async fn stat(&self, path: &[String]) -> NfsResult<FileInfo>;

    /// Read the contents of a directory.
    async fn read_dir(&self, path: &[String]) -> NfsResult<Vec<FileInfo>>;
}

impl std::fmt::Debug for dyn Filesystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filesystem").field("name", &self.name()).finish()
    }
}

/// Attribute mutation for filesystems that support it.
#[async_trait]
pub trait Change: Send + Sync {
    /// Change permission bits.
    async fn chmod(&self, path: &[String], mode: u32) -> NfsResult<()>;

    /// Change ownership.
    async fn chown(&self, path: &[String], uid: u32, gid: u32) -> NfsResult<()>;

    /// Change access and modification times (seconds since the UNIX epoch).
    async fn chtimes(&self, path: &[String], atime: u64, mtime: u64) -> NfsResult<()>;
}
