//! Configuration validation.

use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Validate a fully-loaded configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_cache(config)?;
    validate_logging(config)?;
    Ok(())
}

fn validate_cache(config: &Config) -> ConfigResult<()> {
    let cache = &config.cache;

    if cache.handle_limit == 0 {
        return Err(ConfigError::ValidationError {
            field: "cache.handle_limit".to_owned(),
            message: "handle_limit must be at least 1".to_owned(),
        });
    }

    if cache.verifier_limit == Some(0) {
        return Err(ConfigError::ValidationError {
            field: "cache.verifier_limit".to_owned(),
            message: "verifier_limit must be at least 1".to_owned(),
        });
    }

    if cache.effective_verifier_limit() > cache.handle_limit {
        warn!(
            handle_limit = cache.handle_limit,
            verifier_limit = cache.effective_verifier_limit(),
            "verifier cache is larger than the handle cache"
        );
    }

    Ok(())
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.level".to_owned(),
            message: format!(
                "unsupported log level '{}'; expected one of: {}",
                config.logging.level,
                valid_levels.join(", ")
            ),
        });
    }

    let valid_formats = ["pretty", "compact", "json", "full"];
    if !valid_formats.contains(&config.logging.format.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.format".to_owned(),
            message: format!(
                "unsupported log format '{}'; expected one of: {}",
                config.logging.format,
                valid_formats.join(", ")
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CacheSection, LoggingSection};

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    fn with_cache(cache: CacheSection) -> Config {
        Config {
            cache,
            ..Config::default()
        }
    }

    fn with_logging(level: &str, format: &str) -> Config {
        Config {
            logging: LoggingSection {
                level: level.to_owned(),
                format: format.to_owned(),
                ..LoggingSection::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_zero_limits_rejected() {
        let config = with_cache(CacheSection::with_limit(0));
        assert_eq!(field_of(validate(&config).unwrap_err()), "cache.handle_limit");

        let config = with_cache(CacheSection::with_limit(10).with_verifier_limit(0));
        assert_eq!(field_of(validate(&config).unwrap_err()), "cache.verifier_limit");
    }

    #[test]
    fn test_larger_verifier_cache_is_allowed() {
        let config = with_cache(CacheSection::with_limit(10).with_verifier_limit(100));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_bad_logging_rejected() {
        let config = with_logging("loud", "compact");
        assert_eq!(field_of(validate(&config).unwrap_err()), "logging.level");

        let config = with_logging("info", "xml");
        assert_eq!(field_of(validate(&config).unwrap_err()), "logging.format");

        assert!(validate(&with_logging("debug", "json")).is_ok());
    }
}
