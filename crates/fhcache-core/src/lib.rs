//! fhcache Core - Foundation types and traits shared by the fhcache crates.
//!
//! This crate provides:
//! - `NFSv3` status codes and the [`NfsError`] type surfaced to the protocol engine
//! - The [`Filesystem`] and [`Change`] capabilities that handles point into
//! - The [`NfsHandler`] trait describing everything the protocol engine
//!   expects from a handler, including handle and verifier translation
//!
//! Nothing in this crate owns state. Implementations live in `fhcache`
//! (the caching handler) and in whatever server embeds it.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod error;
pub mod fs;
pub mod handler;
pub mod status;

pub use error::{NfsError, NfsResult};
pub use fs::{Change, FileInfo, Filesystem};
pub use handler::{AuthFlavor, FsStat, MountRequest, MountResponse, MountStatus, NfsHandler};
pub use status::NfsStatus;
