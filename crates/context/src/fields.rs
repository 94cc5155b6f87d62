//! Reserved field names.
//!
//! These keys are a stable vocabulary for structured-format consumers. Any
//! other key is accepted too; the reserved set only names the attributes the
//! builder has dedicated setters for.

/// Identifier tying together the records of one request.
pub const CORRELATION_ID_KEY: &str = "correlation-id";
/// Long-form identifier of a data-collection (scrape) run.
pub const SCRAPE_ID_FULL_KEY: &str = "scrape-id-full";
/// Short-lived identifier of a data-collection (scrape) run.
pub const SCRAPE_ID_SHORT_KEY: &str = "scrape-id-short";
/// Cloud provider the work targets.
pub const PROVIDER_KEY: &str = "provider";
/// Provider service the work targets.
pub const SERVICE_KEY: &str = "service";
/// Provider region the work targets.
pub const REGION_KEY: &str = "region";

/// Every reserved key.
pub const RESERVED_KEYS: [&str; 6] = [
    CORRELATION_ID_KEY,
    SCRAPE_ID_FULL_KEY,
    SCRAPE_ID_SHORT_KEY,
    PROVIDER_KEY,
    SERVICE_KEY,
    REGION_KEY,
];

/// Returns true when `key` is one of the reserved field names.
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
