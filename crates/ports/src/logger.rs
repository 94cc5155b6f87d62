//! Structured logging boundary contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Log level, ordered from most to least verbose.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace.
    Trace,
    /// Debug.
    Debug,
    /// Info.
    #[default]
    Info,
    /// Warn. Rendered and serialized as `warning`.
    #[serde(rename = "warning", alias = "warn")]
    Warn,
    /// Error.
    Error,
    /// Fatal.
    Fatal,
    /// Panic. Strictest threshold; only records at this level pass it.
    Panic,
}

impl LogLevel {
    /// Parse a level name, case-insensitively.
    ///
    /// Accepts `trace`, `debug`, `info`, `warn` (or `warning`), `error`,
    /// `fatal`, `panic`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "fatal" => Some(Self::Fatal),
            "panic" => Some(Self::Panic),
            _ => None,
        }
    }

    /// Parse a level name, falling back to [`LogLevel::Info`].
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Lowercase level name as rendered in records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }

    /// Returns true when a record at `self` passes the `threshold`.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        self >= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Output rendering selected for the process-wide logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Machine-parseable, one JSON object per line.
    Json,
    /// Human-readable `key=value` lines.
    #[default]
    Text,
}

impl LogFormat {
    /// Parse a format name, falling back to [`LogFormat::Text`].
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }

    /// Lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Named log attributes. Keys are unique; a later insert wins.
pub type LogFields = BTreeMap<Box<str>, serde_json::Value>;

/// A single record ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// When the record was created.
    pub time: DateTime<Utc>,
    /// Severity.
    pub level: LogLevel,
    /// Human-readable message.
    pub message: Box<str>,
    /// Structured fields carried by the entry.
    pub fields: LogFields,
}

impl LogRecord {
    /// Create a record stamped with the current time.
    pub fn now(level: LogLevel, message: impl Into<Box<str>>, fields: LogFields) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            fields,
        }
    }
}

/// Boundary contract for turning a record into one output line.
pub trait LogFormatter: Send + Sync {
    /// Render the record. The returned line ends with `\n`.
    fn format(&self, record: &LogRecord) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("Fatal"), Some(LogLevel::Fatal));
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[test]
    fn unparseable_level_falls_back_to_info() {
        assert_eq!(LogLevel::parse_or_default("bogus-level"), LogLevel::Info);
        assert_eq!(LogLevel::parse_or_default(""), LogLevel::Info);
    }

    #[test]
    fn threshold_ordering() {
        assert!(LogLevel::Warn.passes(LogLevel::Info));
        assert!(LogLevel::Info.passes(LogLevel::Info));
        assert!(!LogLevel::Debug.passes(LogLevel::Info));
        assert!(LogLevel::Fatal.passes(LogLevel::Error));
    }

    #[test]
    fn panic_is_the_strictest_threshold() {
        assert_eq!(LogLevel::parse("PANIC"), Some(LogLevel::Panic));
        assert!(LogLevel::Panic > LogLevel::Fatal);
        assert!(!LogLevel::Fatal.passes(LogLevel::Panic));
        assert!(LogLevel::Panic.passes(LogLevel::Panic));
        assert_eq!(LogLevel::Panic.as_str(), "panic");
    }

    #[test]
    fn serde_and_display_agree_on_level_names() -> Result<(), serde_json::Error> {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Fatal,
            LogLevel::Panic,
        ] {
            assert_eq!(serde_json::to_string(&level)?, format!("\"{level}\""));
        }
        assert_eq!(serde_json::from_str::<LogLevel>("\"warn\"")?, LogLevel::Warn);
        assert_eq!(serde_json::from_str::<LogLevel>("\"warning\"")?, LogLevel::Warn);
        Ok(())
    }

    #[test]
    fn format_falls_back_to_text() {
        assert_eq!(LogFormat::parse_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse_or_default("logfmt"), LogFormat::Text);
        assert_eq!(LogFormat::parse_or_default(""), LogFormat::Text);
    }
}
