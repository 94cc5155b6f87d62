//! Record formatters.
//!
//! Both renderers emit `time`, `level`, and `msg` plus every field; the text
//! renderer keeps those three first and the fields sorted by key. A field
//! that would clash with one of those three keys is renamed with a
//! `fields.` prefix rather than dropped.

use chrono::SecondsFormat;
use logctx_ports::{LogFields, LogFormat, LogFormatter, LogRecord};
use serde_json::Value;
use std::fmt::Write as _;
use std::sync::Arc;

const TIME_KEY: &str = "time";
const LEVEL_KEY: &str = "level";
const MESSAGE_KEY: &str = "msg";

/// Pick the formatter for a configured output format.
#[must_use]
pub fn formatter_for(format: LogFormat) -> Arc<dyn LogFormatter> {
    match format {
        LogFormat::Json => Arc::new(JsonFormatter),
        LogFormat::Text => Arc::new(TextFormatter),
    }
}

/// One JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl LogFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut payload: serde_json::Map<String, Value> = prefix_field_clashes(&record.fields)
            .into_iter()
            .map(|(key, value)| (key.into_string(), value))
            .collect();
        payload.insert(TIME_KEY.to_string(), Value::String(timestamp(record)));
        payload.insert(
            LEVEL_KEY.to_string(),
            Value::String(record.level.as_str().to_string()),
        );
        payload.insert(
            MESSAGE_KEY.to_string(),
            Value::String(record.message.to_string()),
        );

        serde_json::to_string(&Value::Object(payload)).map_or_else(
            |_| {
                "{\"level\":\"error\",\"msg\":\"log serialization failed\"}\n".to_string()
            },
            |mut encoded| {
                encoded.push('\n');
                encoded
            },
        )
    }
}

/// Human-readable `key=value` lines with a full timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl LogFormatter for TextFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut line = String::new();
        append_pair(&mut line, TIME_KEY, &timestamp(record));
        append_pair(&mut line, LEVEL_KEY, record.level.as_str());
        append_pair(&mut line, MESSAGE_KEY, &record.message);

        for (key, value) in prefix_field_clashes(&record.fields) {
            let rendered = match value {
                Value::String(text) => text,
                other => other.to_string(),
            };
            append_pair(&mut line, &key, &rendered);
        }

        line.push('\n');
        line
    }
}

fn timestamp(record: &LogRecord) -> String {
    record.time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn prefix_field_clashes(fields: &LogFields) -> LogFields {
    fields
        .iter()
        .map(|(key, value)| {
            let key = if matches!(key.as_ref(), TIME_KEY | LEVEL_KEY | MESSAGE_KEY) {
                format!("fields.{key}").into_boxed_str()
            } else {
                key.clone()
            };
            (key, value.clone())
        })
        .collect()
}

fn append_pair(line: &mut String, key: &str, value: &str) {
    if !line.is_empty() {
        line.push(' ');
    }
    if key.is_empty() {
        line.push_str("\"\"");
    } else {
        append_token(line, key);
    }
    line.push('=');
    append_token(line, value);
}

fn append_token(line: &mut String, token: &str) {
    if needs_quoting(token) {
        // JSON string escaping quotes and escapes control characters.
        let _ = write!(line, "{}", Value::String(token.to_string()));
    } else {
        line.push_str(token);
    }
}

fn needs_quoting(value: &str) -> bool {
    !value.chars().all(|ch| {
        ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '/' | '@' | '^' | '+')
    })
}
