//! fhcache - Bounded file handle and directory verifier cache for NFS servers.
//!
//! Stateless file-sharing protocols address every file by an opaque,
//! fixed-size handle that the client sends back on each request. This crate
//! mints random handles for `(filesystem, path)` pairs, keeps them in a
//! bounded LRU cache, and turns them back into the pair on request. Handles
//! evicted under capacity pressure resolve as stale, which is exactly the
//! status clients are built to recover from.
//!
//! It also keeps directory listing snapshots behind 64-bit cookie verifiers
//! so paginated READDIR replies stay consistent across calls.
//!
//! [`CachingHandler`] wraps any [`NfsHandler`](fhcache_core::NfsHandler):
//! translation is answered from the caches, every other operation is
//! forwarded to the wrapped handler unchanged.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use std::sync::Arc;
//!
//! use fhcache::HandleCache;
//! use fhcache_core::{FileInfo, Filesystem, NfsResult};
//!
//! struct Export;
//!
//! #[async_trait::async_trait]
//! impl Filesystem for Export {
//!     fn name(&self) -> &str { "export" }
//!     async fn stat(&self, _path: &[String]) -> NfsResult<FileInfo> { Ok(FileInfo::dir("export")) }
//!     async fn read_dir(&self, _path: &[String]) -> NfsResult<Vec<FileInfo>> { Ok(Vec::new()) }
//! }
//!
//! let cache = HandleCache::new(NonZeroUsize::new(1024).unwrap());
//! let fs: Arc<dyn Filesystem> = Arc::new(Export);
//! let path = vec!["docs".to_owned(), "a.txt".to_owned()];
//!
//! let handle = cache.mint(&fs, &path);
//! let (_, resolved) = cache.resolve(&handle).unwrap();
//! assert_eq!(resolved, path);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// Caching handler wrapping another handler.
pub mod handler;
/// Bounded file handle cache.
pub mod handles;
/// Path prefix matching.
pub mod path;
/// Bounded directory verifier cache.
pub mod verifiers;

pub use handler::CachingHandler;
pub use handles::{HANDLE_LEN, HandleCache};
pub use path::has_prefix;
pub use verifiers::VerifierCache;
