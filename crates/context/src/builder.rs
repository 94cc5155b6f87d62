//! Field accumulator for logging contexts.

use crate::fields::{
    CORRELATION_ID_KEY, PROVIDER_KEY, REGION_KEY, SCRAPE_ID_FULL_KEY, SCRAPE_ID_SHORT_KEY,
    SERVICE_KEY,
};
use logctx_ports::LogFields;
use serde_json::Value;

/// Chainable builder collecting the fields of one logging scope.
///
/// A builder is owned by the call frame that fills it. Setters take
/// `&mut self`, so sharing one builder across threads requires the caller to
/// bring their own lock; concurrent mutation is outside its contract.
///
/// [`build`](Self::build) is a view: it neither resets nor consumes the
/// builder, and later setters show up in the next `build`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogCtxBuilder {
    fields: LogFields,
}

impl LogCtxBuilder {
    /// Create a builder with an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider field.
    pub fn with_provider(&mut self, provider: impl Into<String>) -> &mut Self {
        self.with_field(PROVIDER_KEY, provider.into())
    }

    /// Set the service field.
    pub fn with_service(&mut self, service: impl Into<String>) -> &mut Self {
        self.with_field(SERVICE_KEY, service.into())
    }

    /// Set the region field.
    pub fn with_region(&mut self, region: impl Into<String>) -> &mut Self {
        self.with_field(REGION_KEY, region.into())
    }

    /// Set the correlation id field.
    pub fn with_correlation_id(&mut self, correlation_id: impl Into<String>) -> &mut Self {
        self.with_field(CORRELATION_ID_KEY, correlation_id.into())
    }

    /// Set the short-lived scrape identifier.
    pub fn with_scrape_id_short(&mut self, id: impl Into<Value>) -> &mut Self {
        self.with_field(SCRAPE_ID_SHORT_KEY, id)
    }

    /// Set the full scrape identifier.
    pub fn with_scrape_id_full(&mut self, id: impl Into<Value>) -> &mut Self {
        self.with_field(SCRAPE_ID_FULL_KEY, id)
    }

    /// Set an arbitrary field, replacing any previous value under `name`.
    pub fn with_field(&mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Borrow the accumulated fields.
    #[must_use]
    pub const fn build(&self) -> &LogFields {
        &self.fields
    }

    /// Consume the builder, returning the accumulated fields.
    #[must_use]
    pub fn into_fields(self) -> LogFields {
        self.fields
    }

    /// Number of fields set so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no field has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<LogCtxBuilder> for LogFields {
    fn from(builder: LogCtxBuilder) -> Self {
        builder.into_fields()
    }
}
