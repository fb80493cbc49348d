//! Config file loading.
//!
//! 1. Start from embedded defaults
//! 2. Parse the config file, if one is given and exists
//! 3. Apply environment overrides
//! 4. Validate

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::Path;

use tracing::{debug, info};

use crate::env::apply_env_overrides;
use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;
use crate::validate;

/// Load configuration from `path` with overrides taken from `env_vars`.
///
/// A missing file is not an error; defaults are used instead.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file exists but cannot be read or
/// parsed, an override is malformed, or the result fails validation.
pub fn load<S: BuildHasher>(
    path: Option<&Path>,
    env_vars: &HashMap<String, String, S>,
) -> ConfigResult<Config> {
    let mut config = match path {
        Some(path) => try_load_file(path)?.unwrap_or_default(),
        None => Config::default(),
    };

    apply_env_overrides(&mut config, env_vars)?;
    validate::validate(&config)?;

    debug!(
        handle_limit = config.cache.handle_limit,
        verifier_limit = config.cache.effective_verifier_limit(),
        "configuration resolved"
    );
    Ok(config)
}

fn try_load_file(path: &Path) -> ConfigResult<Option<Config>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(None);
        },
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            });
        },
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;
    info!(path = %path.display(), "loaded config file");
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ENV_VERIFIER_LIMIT;
    use std::io::Write;

    #[test]
    fn test_load_without_file() {
        let config = load(None, &HashMap::new()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(Some(&dir.path().join("absent.toml")), &HashMap::new()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[cache]\nhandle_limit = 500\nverifier_limit = 50").unwrap();

        let mut env = HashMap::new();
        env.insert(ENV_VERIFIER_LIMIT.to_owned(), "20".to_owned());

        let config = load(Some(file.path()), &env).unwrap();
        assert_eq!(config.cache.handle_limit, 500);
        assert_eq!(config.cache.verifier_limit, Some(20));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[cache\nhandle_limit = ").unwrap();

        let err = load(Some(file.path()), &HashMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_values_rejected_after_merge() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[cache]\nhandle_limit = 0").unwrap();

        let err = load(Some(file.path()), &HashMap::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
