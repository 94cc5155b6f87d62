//! Process-wide default logger.
//!
//! The default logger is configured once, at startup, before concurrent use
//! begins. It is held behind a lock so a late reconfiguration is memory-safe,
//! but entries created before it keep the logger they captured; which
//! configuration a racing caller observes is unspecified.

use crate::entry::{Entry, EntryFactory};
use logctx_adapters::Logger;
use logctx_config::LoggerConfig;
use logctx_context::{ExecutionContext, ResolvedFields};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

static DEFAULT_LOGGER: LazyLock<RwLock<Arc<Logger>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Logger::default())));

/// The current process-wide default logger.
///
/// Until [`configure`] runs this writes `info`-and-above text lines to stderr.
pub fn default_logger() -> Arc<Logger> {
    Arc::clone(
        &DEFAULT_LOGGER
            .read()
            .unwrap_or_else(PoisonError::into_inner),
    )
}

/// Replace the process-wide default logger.
pub fn install_default_logger(logger: Logger) {
    let mut slot = DEFAULT_LOGGER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = Arc::new(logger);
}

/// Configure the default logger from a level and a format name.
///
/// Never fails: an unparseable level selects `info`, an unrecognized format
/// selects the human-readable renderer. Output goes to stderr.
pub fn configure(level: &str, format: &str) {
    configure_with(&LoggerConfig::new(level, format));
}

/// Configure the default logger from a loaded config.
pub fn configure_with(config: &LoggerConfig) {
    let resolved = config.resolve();
    install_default_logger(Logger::stderr(resolved));
    tracing::debug!(
        level = %resolved.level,
        format = %resolved.format,
        "default logger configured"
    );
}

/// Build an entry for `fields` on the default logger.
pub fn make_entry(fields: ResolvedFields) -> Entry {
    EntryFactory::from_default().make_entry(fields)
}

/// Build an entry for the fields resolved at `ctx` on the default logger.
pub fn entry_from(ctx: &ExecutionContext) -> Entry {
    EntryFactory::from_default().entry_from(ctx)
}

/// Build an entry for the ambient context installed by the enclosing scope.
///
/// Outside any scope this is a bare entry.
pub fn current_entry() -> Entry {
    entry_from(&ExecutionContext::current())
}
