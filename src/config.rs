//! Process configuration: `.env` secrets and `config.yaml` limits.
//!
//! `config.yaml` is read with `serde_yaml`. Both the flat dotted form
//!
//! ```yaml
//! rate_limit.requests_per_second: 1
//! rate_limit.burst: 5
//! ```
//!
//! and the nested form
//!
//! ```yaml
//! rate_limit:
//!   requests_per_second: 1
//!   burst: 5
//! ```
//!
//! are accepted. Unknown keys are rejected.

use std::path::Path;

use serde_yaml::Value;

use crate::error::SteamError;
use crate::rate_limit::RateLimitConfig;

/// Load `KEY=VALUE` lines from a `.env` file into the process environment.
///
/// Variables already set in the environment are left untouched.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<(), SteamError> {
    let path = path.as_ref();
    dotenv::from_path(path)
        .map_err(|err| SteamError::Config(format!("failed to load {}: {err}", path.display())))?;
    tracing::debug!(path = %path.display(), "environment file loaded");
    Ok(())
}

/// Settings read from `config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotConfig {
    /// Outbound request limits.
    pub rate_limit: RateLimitConfig,
}

impl BotConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SteamError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|err| SteamError::Config(format!("failed to read {}: {err}", path.display())))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            requests_per_second = config.rate_limit.requests_per_second,
            burst = config.rate_limit.burst,
            "config loaded"
        );
        Ok(config)
    }

    /// Parse and validate config text. Missing keys keep their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, SteamError> {
        let root: Value = serde_yaml::from_str(content)
            .map_err(|err| SteamError::Config(format!("invalid config: {err}")))?;

        let mut entries = Vec::new();
        match root {
            // Empty or comment-only file.
            Value::Null => {}
            Value::Mapping(map) => flatten(None, map, &mut entries)?,
            _ => {
                return Err(SteamError::Config(
                    "config must be a mapping of keys to values".to_string(),
                ));
            }
        }

        let mut config = Self::default();
        for (key, value) in entries {
            match key.as_str() {
                "rate_limit.requests_per_second" => {
                    config.rate_limit.requests_per_second = integer(&key, &value)?;
                }
                "rate_limit.burst" => config.rate_limit.burst = integer(&key, &value)?,
                "rate_limit.enabled" => {
                    config.rate_limit.enabled = value.as_bool().ok_or_else(|| {
                        SteamError::Config(format!("{key} must be true or false"))
                    })?;
                }
                _ => {
                    return Err(SteamError::Config(format!(
                        "unknown configuration key: {key}"
                    )));
                }
            }
        }

        config.rate_limit.validate()?;
        Ok(config)
    }
}

/// Collect `(dotted.key, value)` pairs from nested mappings.
fn flatten(
    prefix: Option<&str>,
    map: serde_yaml::Mapping,
    out: &mut Vec<(String, Value)>,
) -> Result<(), SteamError> {
    for (key, value) in map {
        let key = match key {
            Value::String(key) => key,
            other => {
                return Err(SteamError::Config(format!(
                    "configuration keys must be strings, got {other:?}"
                )));
            }
        };
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        match value {
            Value::Mapping(nested) => flatten(Some(&key), nested, out)?,
            value => out.push((key, value)),
        }
    }
    Ok(())
}

fn integer(key: &str, value: &Value) -> Result<u32, SteamError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| SteamError::Config(format!("{key} must be a non-negative integer")))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_flat_dotted_keys() {
        let config = BotConfig::from_yaml_str(
            "# limits\nrate_limit.requests_per_second: 2\nrate_limit.burst: 10\n",
        )
        .unwrap();
        assert_eq!(config.rate_limit, RateLimitConfig::new(2, 10));
    }

    #[test]
    fn test_nested_mapping() {
        let config = BotConfig::from_yaml_str(
            "rate_limit:\n  requests_per_second: 3\n  burst: 4\n  enabled: false\n",
        )
        .unwrap();
        assert_eq!(config.rate_limit.requests_per_second, 3);
        assert_eq!(config.rate_limit.burst, 4);
        assert!(!config.rate_limit.enabled);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = BotConfig::from_yaml_str("rate_limit.burst: 8\n").unwrap();
        assert_eq!(config.rate_limit.requests_per_second, 1);
        assert_eq!(config.rate_limit.burst, 8);

        let empty = BotConfig::from_yaml_str("").unwrap();
        assert_eq!(empty, BotConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = BotConfig::from_yaml_str("rate_limit.window: 5\n").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("rate_limit.window"));
    }

    #[test]
    fn test_non_integer_rejected() {
        let err = BotConfig::from_yaml_str("rate_limit.burst: five\n").unwrap_err();
        assert!(err.is_config());

        let err = BotConfig::from_yaml_str("rate_limit.burst: -1\n").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(
            BotConfig::from_yaml_str("rate_limit.requests_per_second: 0\n")
                .unwrap_err()
                .is_config()
        );
        assert!(
            BotConfig::from_yaml_str("rate_limit.burst: 0\n")
                .unwrap_err()
                .is_config()
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rate_limit.requests_per_second: 5").unwrap();
        writeln!(file, "rate_limit.burst: 2").unwrap();

        let config = BotConfig::load(file.path()).unwrap();
        assert_eq!(config.rate_limit, RateLimitConfig::new(5, 2));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BotConfig::load(dir.path().join("config.yaml")).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "STEAM_TRADE_CLIENT_TEST_VAR=from_file").unwrap();

        load_env_file(file.path()).unwrap();
        assert_eq!(
            std::env::var("STEAM_TRADE_CLIENT_TEST_VAR").as_deref(),
            Ok("from_file")
        );
    }
}
