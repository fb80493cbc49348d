//! Mock implementations for testing.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use fhcache_core::{
    AuthFlavor, Change, FileInfo, Filesystem, FsStat, MountRequest, MountResponse, MountStatus,
    NfsError, NfsHandler, NfsResult, NfsStatus,
};

/// In-memory [`Filesystem`] holding metadata only.
///
/// Parent directories are created implicitly when a file or directory is
/// added.
#[derive(Debug, Clone)]
pub struct MemoryFs {
    name: String,
    entries: BTreeMap<Vec<String>, FileInfo>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Add a regular file of `size` bytes.
    #[must_use]
    pub fn with_file(mut self, path: &[&str], size: u64) -> Self {
        if let Some((name, parent)) = path.split_last() {
            self.add_parents(parent);
            self.entries.insert(owned(path), FileInfo::file(*name, size));
        }
        self
    }

    /// Add a directory.
    #[must_use]
    pub fn with_dir(mut self, path: &[&str]) -> Self {
        self.add_parents(path);
        self
    }

    fn add_parents(&mut self, path: &[&str]) {
        for depth in 1..=path.len() {
            let prefix = &path[..depth];
            if let Some(name) = prefix.last() {
                self.entries
                    .entry(owned(prefix))
                    .or_insert_with(|| FileInfo::dir(*name));
            }
        }
    }
}

fn owned(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| (*s).to_owned()).collect()
}

#[async_trait]
impl Filesystem for MemoryFs {
    fn name(&self) -> &str {
        &self.name
    }

    async fn stat(&self, path: &[String]) -> NfsResult<FileInfo> {
        if path.is_empty() {
            return Ok(FileInfo::dir(self.name.clone()));
        }
        self.entries
            .get(path)
            .cloned()
            .ok_or(NfsError::Status(NfsStatus::NoEnt))
    }

    async fn read_dir(&self, path: &[String]) -> NfsResult<Vec<FileInfo>> {
        let dir = self.stat(path).await?;
        if !dir.is_dir {
            return Err(NfsError::Status(NfsStatus::NotDir));
        }
        Ok(self
            .entries
            .iter()
            .filter(|(k, _)| k.len() == path.len().saturating_add(1) && k.starts_with(path))
            .map(|(_, v)| v.clone())
            .collect())
    }
}

/// A [`Change`] implementation that accepts everything.
#[derive(Debug, Default)]
pub struct NoopChange;

#[async_trait]
impl Change for NoopChange {
    async fn chmod(&self, _path: &[String], _mode: u32) -> NfsResult<()> {
        Ok(())
    }

    async fn chown(&self, _path: &[String], _uid: u32, _gid: u32) -> NfsResult<()> {
        Ok(())
    }

    async fn chtimes(&self, _path: &[String], _atime: u64, _mtime: u64) -> NfsResult<()> {
        Ok(())
    }
}

/// An [`NfsHandler`] that serves one filesystem and records every call.
///
/// Handle translation is naive: a handle is the `/`-joined path. Verifiers
/// are not supported (`verifier_for` returns 0 and nothing is stored).
#[derive(Clone)]
pub struct RecordingHandler {
    fs: Arc<dyn Filesystem>,
    export: String,
    stat: FsStat,
    change: Option<Arc<dyn Change>>,
    invalidate_status: Option<NfsStatus>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingHandler {
    /// Serve `fs` at export path `/`.
    #[must_use]
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self {
            fs,
            export: "/".to_owned(),
            stat: FsStat::default(),
            change: None,
            invalidate_status: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve the filesystem at a different export path.
    #[must_use]
    pub fn with_export(mut self, export: impl Into<String>) -> Self {
        self.export = export.into();
        self
    }

    /// Statistics returned from `fs_stat`.
    #[must_use]
    pub fn with_fs_stat(mut self, stat: FsStat) -> Self {
        self.stat = stat;
        self
    }

    /// Change capability returned from `change`.
    #[must_use]
    pub fn with_change(mut self, change: Arc<dyn Change>) -> Self {
        self.change = Some(change);
        self
    }

    /// Make `invalidate_handle` fail with `status`.
    #[must_use]
    pub fn with_invalidate_failure(mut self, status: NfsStatus) -> Self {
        self.invalidate_status = Some(status);
        self
    }

    /// Names of the methods called so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// True if `method` was called at least once.
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.calls().iter().any(|c| c == method)
    }

    fn record(&self, method: &str) {
        if let Ok(mut guard) = self.calls.lock() {
            guard.push(method.to_owned());
        }
    }
}

#[async_trait]
impl NfsHandler for RecordingHandler {
    async fn mount(&self, request: &MountRequest) -> MountResponse {
        self.record("mount");
        if request.dirpath == self.export {
            MountResponse::ok(Arc::clone(&self.fs), vec![AuthFlavor::Null, AuthFlavor::Unix])
        } else {
            MountResponse::failed(MountStatus::NoEnt)
        }
    }

    fn change(&self, _fs: &Arc<dyn Filesystem>) -> Option<Arc<dyn Change>> {
        self.record("change");
        self.change.clone()
    }

    async fn fs_stat(&self, _fs: &Arc<dyn Filesystem>) -> NfsResult<FsStat> {
        self.record("fs_stat");
        Ok(self.stat)
    }

    fn to_handle(&self, _fs: &Arc<dyn Filesystem>, path: &[String]) -> Vec<u8> {
        self.record("to_handle");
        path.join("/").into_bytes()
    }

    fn from_handle(&self, handle: &[u8]) -> NfsResult<(Arc<dyn Filesystem>, Vec<String>)> {
        self.record("from_handle");
        let joined =
            std::str::from_utf8(handle).map_err(|_| NfsError::Status(NfsStatus::BadHandle))?;
        let path = joined
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Ok((Arc::clone(&self.fs), path))
    }

    fn invalidate_handle(&self, _fs: &Arc<dyn Filesystem>, _handle: &[u8]) -> NfsResult<()> {
        self.record("invalidate_handle");
        match self.invalidate_status {
            Some(status) => Err(NfsError::Status(status)),
            None => Ok(()),
        }
    }

    fn handle_limit(&self) -> usize {
        self.record("handle_limit");
        usize::MAX
    }

    fn verifier_for(&self, _handle: &[u8], _contents: Vec<FileInfo>) -> u64 {
        self.record("verifier_for");
        0
    }

    fn data_for_verifier(&self, _handle: &[u8], _verifier: u64) -> Option<Arc<[FileInfo]>> {
        self.record("data_for_verifier");
        None
    }
}
