//! # logctx
//!
//! Inheritable structured-logging context for request call chains.
//!
//! Producers describe a scope with [`LogCtxBuilder`] and attach it to an
//! [`ExecutionContext`]; the context travels down the call chain; consumers
//! turn it into an [`Entry`] and log through the process-wide default logger.
//!
//! ```
//! use logctx::{ExecutionContext, LogCtxBuilder};
//!
//! logctx::configure("debug", "json");
//!
//! let mut scope = LogCtxBuilder::new();
//! scope.with_provider("aws").with_service("pke").with_region("eu-west-1");
//! let ctx = ExecutionContext::root().attach(scope.build());
//!
//! let entry = logctx::entry_from(&ctx);
//! assert_eq!(entry.fields().len(), 3);
//! entry.infof(format_args!("scraped {} products", 42));
//! ```
//!
//! This crate depends on `adapters`, `config`, `context`, `ports`, and `shared`.

pub mod default_logger;
pub mod entry;
pub mod request;

pub use default_logger::{
    configure, configure_with, current_entry, default_logger, entry_from,
    install_default_logger, make_entry,
};
pub use entry::{ERROR_KEY, Entry, EntryFactory};
pub use request::correlation_id;

pub use logctx_adapters::{
    JsonFormatter, LogSink, Logger, MemoryLogSink, StderrLogSink, TextFormatter,
};
pub use logctx_config::{
    LoggerConfig, LoggerEnv, ResolvedLoggerConfig, load_logger_config_from_path,
    load_logger_config_std_env,
};
pub use logctx_context::{
    CORRELATION_ID_KEY, ExecutionContext, LogCtxBuilder, PROVIDER_KEY, REGION_KEY,
    RESERVED_KEYS, ResolvedFields, SCRAPE_ID_FULL_KEY, SCRAPE_ID_SHORT_KEY, SERVICE_KEY, attach,
    extract, is_reserved_key,
};
pub use logctx_ports::{LogFields, LogFormat, LogFormatter, LogLevel, LogRecord, RequestValues};
pub use logctx_shared::{CorrelationId, ErrorEnvelope};

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
