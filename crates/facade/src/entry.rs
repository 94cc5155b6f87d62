//! Log entries bound to a resolved field set.

use logctx_adapters::Logger;
use logctx_context::{ExecutionContext, ResolvedFields};
use logctx_ports::{LogFields, LogLevel, LogRecord};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Key under which [`Entry::with_error`] records an error.
pub const ERROR_KEY: &str = "error";

/// Write-only handle pairing a logger with the fields every record carries.
///
/// Entries are cheap to create and meant to be dropped after use. Level
/// methods emit synchronously; `fatal` and `fatalf` also terminate the
/// process with exit status 1 once the record has been flushed.
#[derive(Debug, Clone)]
pub struct Entry {
    logger: Arc<Logger>,
    fields: LogFields,
}

impl Entry {
    /// A bare entry with no pre-set fields.
    #[must_use]
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            logger,
            fields: LogFields::new(),
        }
    }

    /// An entry pre-populated with `fields`.
    #[must_use]
    pub const fn with_logger_and_fields(logger: Arc<Logger>, fields: LogFields) -> Self {
        Self { logger, fields }
    }

    /// Derive an entry with one more field.
    #[must_use]
    pub fn with_field(&self, key: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(key.into(), value.into());
        Self::with_logger_and_fields(Arc::clone(&self.logger), fields)
    }

    /// Derive an entry with several more fields.
    #[must_use]
    pub fn with_fields<K, V>(&self, extra: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Box<str>>,
        V: Into<Value>,
    {
        let mut fields = self.fields.clone();
        fields.extend(
            extra
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        Self::with_logger_and_fields(Arc::clone(&self.logger), fields)
    }

    /// Derive an entry carrying `error` under [`ERROR_KEY`].
    #[must_use]
    pub fn with_error(&self, error: &dyn std::error::Error) -> Self {
        self.with_field(ERROR_KEY, error.to_string())
    }

    /// Fields every record from this entry carries.
    #[must_use]
    pub const fn fields(&self) -> &LogFields {
        &self.fields
    }

    /// The logger records are written through.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Returns true when a record at `level` would be emitted.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.logger.is_enabled(level)
    }

    /// Emit `message` at `level`. Never exits, even at [`LogLevel::Fatal`].
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }
        self.logger
            .log(&LogRecord::now(level, message.to_string(), self.fields.clone()));
    }

    /// Trace-level record.
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    /// Debug-level record.
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    /// Info-level record.
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    /// Warn-level record.
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    /// Error-level record.
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Fatal-level record, then exit the process with status 1.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.log(LogLevel::Fatal, message);
        self.logger.flush();
        std::process::exit(1)
    }

    /// Trace-level record from format arguments.
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    /// Debug-level record from format arguments.
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    /// Info-level record from format arguments.
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    /// Warn-level record from format arguments.
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    /// Error-level record from format arguments.
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    /// Fatal-level record from format arguments, then exit with status 1.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(args)
    }
}

/// Turns resolved field sets into entries bound to one logger.
#[derive(Debug, Clone)]
pub struct EntryFactory {
    logger: Arc<Logger>,
}

impl EntryFactory {
    /// A factory producing entries for `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// A factory bound to the current process-wide default logger.
    #[must_use]
    pub fn from_default() -> Self {
        Self::new(crate::default_logger())
    }

    /// Build an entry carrying `fields`; an empty set yields a bare entry.
    #[must_use]
    pub fn make_entry(&self, fields: ResolvedFields) -> Entry {
        let logger = Arc::clone(&self.logger);
        if fields.is_empty() {
            return Entry::new(logger);
        }
        Entry::with_logger_and_fields(logger, fields.into_inner())
    }

    /// Extract the fields resolved at `ctx` and build an entry from them.
    #[must_use]
    pub fn entry_from(&self, ctx: &ExecutionContext) -> Entry {
        self.make_entry(ctx.extract())
    }
}
