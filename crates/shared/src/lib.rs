//! # logctx-shared
//!
//! Shared result types, error handling, and identifiers for the logctx workspace.
//!
//! - Result and error envelope types used by the fallible ambient paths
//!   (config loading, CLI input)
//! - `CorrelationId`, the request-scoped identifier stamped on log records
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Serde-compatible** - All public types support serialization

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod correlation;
pub mod errors;
pub mod result;

pub use correlation::CorrelationId;
pub use errors::{ErrorCode, ErrorEnvelope, ErrorMetadata};
pub use result::Result;

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
