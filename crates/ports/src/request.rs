//! Request-boundary lookup contract.
//!
//! The transport layer (an HTTP framework's per-request store, a header map)
//! is where an inbound correlation id lives. This is separate
//! from the execution context's field set: writers put a correlation id into
//! the field set through the builder, while this accessor reads what the
//! transport recorded. The two are not reconciled.

use logctx_shared::CorrelationId;
use std::collections::{BTreeMap, HashMap};

/// Key under which the transport layer stores the correlation id.
pub const REQUEST_CORRELATION_ID_KEY: &str = "correlation-id";

/// String values recorded on a request by the transport layer.
pub trait RequestValues {
    /// Look up a string value by key.
    fn get_string(&self, key: &str) -> Option<&str>;

    /// Read the correlation id recorded by the transport layer, if any.
    fn correlation_id(&self) -> Option<CorrelationId> {
        self.get_string(REQUEST_CORRELATION_ID_KEY)
            .and_then(|value| CorrelationId::parse(value).ok())
    }
}

impl RequestValues for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl RequestValues for BTreeMap<String, String> {
    fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}
