//! Prelude module - commonly used types for convenient import.
//!
//! Use `use fhcache_core::prelude::*;` to import all essential types.

// Errors
pub use crate::{NfsError, NfsResult, NfsStatus};

// Filesystem capabilities
pub use crate::{Change, FileInfo, Filesystem};

// Handler contract
pub use crate::{AuthFlavor, FsStat, MountRequest, MountResponse, MountStatus, NfsHandler};
