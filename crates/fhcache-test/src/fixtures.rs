//! Test fixtures for common types.

use std::num::NonZeroUsize;
use std::sync::Arc;

use fhcache_core::{FileInfo, Filesystem};
use fhcache_telemetry::{LogConfig, LogTarget, setup_logging};

use crate::mocks::MemoryFs;

/// Split a `/`-separated path into segments. `""` and `"/"` are the root.
#[must_use]
pub fn test_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A small filesystem tree:
///
/// ```text
/// /docs/a.txt
/// /docs/reports/q1.txt
/// /tmp/
/// ```
#[must_use]
pub fn test_fs() -> Arc<dyn Filesystem> {
    Arc::new(
        MemoryFs::new("test")
            .with_file(&["docs", "a.txt"], 12)
            .with_file(&["docs", "reports", "q1.txt"], 2048)
            .with_dir(&["tmp"]),
    )
}

/// A second, distinct filesystem.
#[must_use]
pub fn test_other_fs() -> Arc<dyn Filesystem> {
    Arc::new(MemoryFs::new("other").with_file(&["readme.md"], 64))
}

/// `count` file entries named `file-0` .. `file-{count-1}`.
#[must_use]
pub fn test_entries(count: u64) -> Vec<FileInfo> {
    (0..count)
        .map(|i| FileInfo::file(format!("file-{i}"), i))
        .collect()
}

/// A cache capacity.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn test_limit(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("test limit must be non-zero")
}

/// Install a test-friendly tracing subscriber honoring `RUST_LOG`.
///
/// Safe to call from many tests; only the first call installs.
pub fn init_test_logging() {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "error".to_owned());
    let config = LogConfig::new(level)
        .with_target(LogTarget::Test)
        .without_ansi();
    // A second call finds the subscriber already installed.
    let _ = setup_logging(&config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_splitting() {
        assert!(test_path("/").is_empty());
        assert!(test_path("").is_empty());
        assert_eq!(test_path("/docs//a.txt"), vec!["docs", "a.txt"]);
    }

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_entries_are_named() {
        let entries = test_entries(3);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].name, "file-2");
    }
}
