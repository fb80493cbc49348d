//! Environment variable overrides.

use std::collections::HashMap;
use std::hash::BuildHasher;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Overrides `cache.handle_limit`.
pub const ENV_HANDLE_LIMIT: &str = "FHCACHE_HANDLE_LIMIT";
/// Overrides `cache.verifier_limit`.
pub const ENV_VERIFIER_LIMIT: &str = "FHCACHE_VERIFIER_LIMIT";
/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "FHCACHE_LOG_LEVEL";

/// Snapshot the `FHCACHE_*` variables from the process environment.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(k, _)| k.starts_with("FHCACHE_"))
        .collect()
}

/// Apply overrides from `vars` on top of `config`.
///
/// # Errors
///
/// Returns [`ConfigError::EnvError`] if a limit override is not an unsigned
/// integer.
pub fn apply_env_overrides<S: BuildHasher>(
    config: &mut Config,
    vars: &HashMap<String, String, S>,
) -> ConfigResult<()> {
    if let Some(raw) = vars.get(ENV_HANDLE_LIMIT) {
        config.cache.handle_limit = parse_limit(ENV_HANDLE_LIMIT, raw)?;
        debug!(limit = config.cache.handle_limit, "handle limit from environment");
    }
    if let Some(raw) = vars.get(ENV_VERIFIER_LIMIT) {
        config.cache.verifier_limit = Some(parse_limit(ENV_VERIFIER_LIMIT, raw)?);
        debug!(limit = ?config.cache.verifier_limit, "verifier limit from environment");
    }
    if let Some(level) = vars.get(ENV_LOG_LEVEL) {
        config.logging.level = level.trim().to_lowercase();
    }
    Ok(())
}

fn parse_limit(var: &str, raw: &str) -> ConfigResult<usize> {
    raw.trim().parse().map_err(|e| ConfigError::EnvError {
        var: var.to_owned(),
        message: format!("expected an unsigned integer, got '{raw}' ({e})"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            &vars(&[
                (ENV_HANDLE_LIMIT, "256"),
                (ENV_VERIFIER_LIMIT, " 32 "),
                (ENV_LOG_LEVEL, "DEBUG"),
            ]),
        )
        .unwrap();

        assert_eq!(config.cache.handle_limit, 256);
        assert_eq!(config.cache.verifier_limit, Some(32));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_no_overrides_leaves_config_alone() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, &HashMap::new()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_non_numeric_limit_rejected() {
        let mut config = Config::default();
        let err = apply_env_overrides(&mut config, &vars(&[(ENV_HANDLE_LIMIT, "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError { ref var, .. } if var == ENV_HANDLE_LIMIT));
    }

    #[test]
    fn test_overrides_accept_any_hasher() {
        use std::hash::{BuildHasherDefault, DefaultHasher};

        let mut env: HashMap<String, String, BuildHasherDefault<DefaultHasher>> =
            HashMap::default();
        env.insert(ENV_HANDLE_LIMIT.to_owned(), "12".to_owned());

        let mut config = Config::default();
        apply_env_overrides(&mut config, &env).unwrap();
        assert_eq!(config.cache.handle_limit, 12);
    }
}
