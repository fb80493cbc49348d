//! fhcache Test - Shared test utilities.
//!
//! Mock implementations of the handler contract and an in-memory filesystem,
//! used as a dev-dependency by the other fhcache crates.
//!
//! ```rust,ignore
//! use fhcache_core::NfsHandler;
//! use fhcache_test::{RecordingHandler, test_fs, test_limit, test_path};
//!
//! let fs = test_fs();
//! let inner = RecordingHandler::new(fs.clone());
//! let handler = fhcache::CachingHandler::new(inner, test_limit(16));
//! let handle = handler.to_handle(&fs, &test_path("docs/a.txt"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
