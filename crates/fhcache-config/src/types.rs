//! Configuration types.
//!
//! Every struct implements [`Default`] so that an empty file (or a bare
//! `[section]` header) produces a working configuration.

use serde::{Deserialize, Serialize};

/// Default number of file handles held before LRU eviction.
pub const DEFAULT_HANDLE_LIMIT: usize = 1024;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Handle and verifier cache capacities.
    pub cache: CacheSection,
    /// Logging level, format, and per-crate directives.
    pub logging: LoggingSection,
}

// ---------------------------------------------------------------------------
// CacheSection
// ---------------------------------------------------------------------------

/// Capacities of the two bounded caches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    /// Maximum number of live file handles.
    pub handle_limit: usize,
    /// Maximum number of live directory verifiers. `None` uses
    /// `handle_limit`.
    pub verifier_limit: Option<usize>,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            handle_limit: DEFAULT_HANDLE_LIMIT,
            verifier_limit: None,
        }
    }
}

impl CacheSection {
    /// A section with both caches sized to `limit`.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            handle_limit: limit,
            verifier_limit: None,
        }
    }

    /// Set an independent verifier cache capacity.
    #[must_use]
    pub fn with_verifier_limit(mut self, limit: usize) -> Self {
        self.verifier_limit = Some(limit);
        self
    }

    /// The verifier cache capacity after falling back to `handle_limit`.
    #[must_use]
    pub fn effective_verifier_limit(&self) -> usize {
        self.verifier_limit.unwrap_or(self.handle_limit)
    }
}

// ---------------------------------------------------------------------------
// LoggingSection
// ---------------------------------------------------------------------------

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"`, or `"full"`.
    pub format: String,
    /// Per-crate tracing directives (e.g. `["fhcache=trace"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "compact".to_owned(),
            directives: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cache.handle_limit, DEFAULT_HANDLE_LIMIT);
        assert_eq!(config.cache.verifier_limit, None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_verifier_limit_falls_back_to_handle_limit() {
        assert_eq!(CacheSection::with_limit(64).effective_verifier_limit(), 64);
        assert_eq!(
            CacheSection::with_limit(64)
                .with_verifier_limit(8)
                .effective_verifier_limit(),
            8
        );
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: Config = toml::from_str("[cache]\nverifier_limit = 16\n").unwrap();
        assert_eq!(config.cache.handle_limit, DEFAULT_HANDLE_LIMIT);
        assert_eq!(config.cache.verifier_limit, Some(16));
        assert_eq!(config.logging, LoggingSection::default());
    }
}
