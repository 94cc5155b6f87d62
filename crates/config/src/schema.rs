//! Logger configuration schema.
//!
//! Values are kept as the raw strings the operator supplied. Turning them into
//! a level and a format happens in [`LoggerConfig::resolve`], which never
//! fails: unknown levels resolve to `info`, unknown formats to `text`.

use logctx_ports::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// Level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Format used when none is configured.
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Raw logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Severity threshold name (`trace`, `debug`, `info`, `warn`, `error`, `fatal`).
    pub level: String,
    /// Output format name (`json` or `text`).
    pub format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Build a config from raw level and format strings.
    pub fn new(level: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            format: format.into(),
        }
    }

    /// Resolve the raw strings into a threshold and a renderer choice.
    #[must_use]
    pub fn resolve(&self) -> ResolvedLoggerConfig {
        let level = LogLevel::parse(&self.level).unwrap_or_else(|| {
            tracing::debug!(
                value = %self.level,
                fallback = %LogLevel::default(),
                "unrecognized log level"
            );
            LogLevel::default()
        });

        let format = LogFormat::parse_or_default(&self.format);
        if format == LogFormat::Text && !self.format.trim().eq_ignore_ascii_case("text") {
            tracing::debug!(value = %self.format, fallback = %format, "unrecognized log format");
        }

        ResolvedLoggerConfig { level, format }
    }
}

/// Configuration after fallbacks have been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLoggerConfig {
    /// Minimum level a record needs to be emitted.
    pub level: LogLevel,
    /// Selected renderer.
    pub format: LogFormat,
}
