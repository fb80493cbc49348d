//! fhcache Telemetry - Logging setup for servers embedding the handle cache.
//!
//! # Example
//!
//! ```rust,no_run
//! use fhcache_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), fhcache_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("fhcache=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("handle cache ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, LogTarget, setup_default_logging, setup_logging};
