//! # logctx-adapters
//!
//! Adapter implementations for the logging ports: a JSON and a text
//! formatter, stderr and in-memory sinks, and the [`Logger`] that applies a
//! level threshold before rendering a record into a sink.
//! This crate depends on `ports` and `config`.

pub mod format;
pub mod log_sink;
pub mod logger;

pub use format::{JsonFormatter, TextFormatter, formatter_for};
pub use log_sink::{LogSink, MemoryLogSink, StderrLogSink};
pub use logger::Logger;

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
