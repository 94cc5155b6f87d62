//! # logctx-context
//!
//! The core of logctx: accumulate named fields with [`LogCtxBuilder`], attach
//! them to an immutable [`ExecutionContext`] that inherits and overrides its
//! ancestors' fields, and extract the resolved set wherever a log line is
//! written.
//!
//! ```
//! use logctx_context::{ExecutionContext, LogCtxBuilder};
//!
//! let request = ExecutionContext::root().attach(
//!     LogCtxBuilder::new()
//!         .with_correlation_id("xyz")
//!         .with_region("eu")
//!         .build(),
//! );
//! let scrape = request.attach(LogCtxBuilder::new().with_correlation_id("abc").build());
//!
//! let fields = scrape.extract();
//! assert_eq!(fields.get_str("correlation-id"), Some("abc"));
//! assert_eq!(fields.get_str("region"), Some("eu"));
//! ```
//!
//! This crate depends on `ports` only.

pub mod ambient;
pub mod builder;
pub mod fields;
pub mod store;

pub use builder::LogCtxBuilder;
pub use fields::{
    CORRELATION_ID_KEY, PROVIDER_KEY, REGION_KEY, RESERVED_KEYS, SCRAPE_ID_FULL_KEY,
    SCRAPE_ID_SHORT_KEY, SERVICE_KEY, is_reserved_key,
};
pub use store::{ExecutionContext, ResolvedFields, attach, extract};

/// Returns the context crate version.
#[must_use]
pub const fn context_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
