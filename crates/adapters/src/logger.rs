//! Threshold-filtering logger adapter.

use crate::format::formatter_for;
use crate::log_sink::{LogSink, StderrLogSink};
use logctx_config::ResolvedLoggerConfig;
use logctx_ports::{LogFormat, LogFormatter, LogLevel, LogRecord};
use std::fmt;
use std::sync::Arc;

/// Renders records at or above a threshold into a sink, one line each.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    formatter: Arc<dyn LogFormatter>,
    format: LogFormat,
    min_level: LogLevel,
}

impl Logger {
    /// Create a logger writing `format` lines to `sink` at the default threshold.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>, format: LogFormat) -> Self {
        Self {
            sink,
            formatter: formatter_for(format),
            format,
            min_level: LogLevel::default(),
        }
    }

    /// Create a logger from a resolved config.
    #[must_use]
    pub fn from_config(sink: Arc<dyn LogSink>, config: ResolvedLoggerConfig) -> Self {
        Self::new(sink, config.format).with_min_level(config.level)
    }

    /// Create a logger writing to stderr from a resolved config.
    #[must_use]
    pub fn stderr(config: ResolvedLoggerConfig) -> Self {
        Self::from_config(Arc::new(StderrLogSink::new()), config)
    }

    /// Set the minimum log level.
    #[must_use]
    pub const fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Minimum level a record needs to be emitted.
    #[must_use]
    pub const fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Output format this logger renders.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }

    /// Returns true when a record at `level` would be emitted.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.min_level)
    }

    /// Render and write `record` if it passes the threshold.
    pub fn log(&self, record: &LogRecord) {
        if !self.is_enabled(record.level) {
            return;
        }
        self.sink.write_line(&self.formatter.format(record));
    }

    /// Flush the underlying sink.
    pub fn flush(&self) {
        self.sink.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stderr(ResolvedLoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Logger")
            .field("format", &self.format)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
