//! Environment variable parsing and env-to-config merging.
//!
//! Env values are taken verbatim; blank values count as unset. Validation
//! is deferred to [`LoggerConfig::resolve`](crate::LoggerConfig::resolve),
//! which degrades instead of failing.

use crate::schema::LoggerConfig;
use std::collections::BTreeMap;

/// Env var: logger level threshold.
pub const ENV_LOG_LEVEL: &str = "LOGCTX_LOG_LEVEL";
/// Env var: logger output format.
pub const ENV_LOG_FORMAT: &str = "LOGCTX_LOG_FORMAT";

/// Typed env-derived overrides for `LoggerConfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerEnv {
    /// Override for `level`.
    pub level: Option<Box<str>>,
    /// Override for `format`.
    pub format: Option<Box<str>>,
}

impl LoggerEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self {
            level: read_non_blank(map, ENV_LOG_LEVEL),
            format: read_non_blank(map, ENV_LOG_FORMAT),
        }
    }

    /// Parse env overrides from the process environment.
    #[must_use]
    pub fn from_std_env() -> Self {
        let map: BTreeMap<String, String> = [ENV_LOG_LEVEL, ENV_LOG_FORMAT]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value)))
            .collect();
        Self::from_map(&map)
    }

    /// Returns true when no override is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.level.is_none() && self.format.is_none()
    }
}

fn read_non_blank(map: &BTreeMap<String, String>, key: &str) -> Option<Box<str>> {
    map.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(Box::from)
}

/// Apply env overrides on top of `config`.
#[must_use]
pub fn apply_env_overrides(mut config: LoggerConfig, env: &LoggerEnv) -> LoggerConfig {
    if let Some(level) = &env.level {
        config.level = level.to_string();
    }
    if let Some(format) = &env.format {
        config.format = format.to_string();
    }
    config
}
