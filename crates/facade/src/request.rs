//! Correlation id lookup at the request boundary.
//!
//! This reads what the transport layer recorded, not the execution
//! context's field set. Callers that want the id on their records copy it
//! into a builder with `with_correlation_id`.

use logctx_ports::RequestValues;

/// The correlation id recorded on `request`, or an empty string.
pub fn correlation_id(request: &dyn RequestValues) -> String {
    request
        .correlation_id()
        .map(String::from)
        .unwrap_or_default()
}
