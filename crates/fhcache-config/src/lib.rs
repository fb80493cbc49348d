#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Configuration for the fhcache handle cache.
//!
//! The whole surface is two capacities plus a logging section:
//!
//! ```toml
//! [cache]
//! handle_limit = 1024
//! verifier_limit = 128   # optional, defaults to handle_limit
//!
//! [logging]
//! level = "info"
//! format = "compact"
//! ```
//!
//! # Precedence
//!
//! 1. **Environment variables** (`FHCACHE_HANDLE_LIMIT`,
//!    `FHCACHE_VERIFIER_LIMIT`, `FHCACHE_LOG_LEVEL`)
//! 2. **Config file** passed to [`Config::load`]
//! 3. **Embedded defaults**
//!
//! # Usage
//!
//! ```rust,no_run
//! use fhcache_config::Config;
//!
//! let config = Config::load(Some(std::path::Path::new("fhcache.toml"))).unwrap();
//! println!("holding up to {} handles", config.cache.handle_limit);
//! ```

/// Environment variable overrides.
pub mod env;
/// Configuration error types.
pub mod error;
/// Configuration file loading.
pub mod loader;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use types::*;

impl Config {
    /// Load configuration from an optional file, then apply environment
    /// overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, an
    /// environment override is not a number, or validation fails.
    pub fn load(path: Option<&std::path::Path>) -> ConfigResult<Self> {
        loader::load(path, &env::collect_env_vars())
    }

    /// Parse configuration from a TOML string and validate it.
    ///
    /// Environment variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the string is not valid TOML or
    /// validation fails.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_owned(),
            source: e,
        })?;
        validate::validate(&config)?;
        Ok(config)
    }
}
