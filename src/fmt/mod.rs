//! Line formatting shared by every transport — one place decides how a record
//! renders so active files, archives, and the console fallback never drift.

pub mod color;

pub use color::Color;

use crate::transport::LogRecord;
use chrono::{Local, SecondsFormat};

/// ISO-8601 timestamp prefixing every persisted line. RFC 3339 with millisecond
/// precision keeps lines sortable and machine-parseable.
#[must_use]
pub fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders the level/scope/message portion of a line, without the timestamp.
///
/// Metadata is appended as compact JSON so structured fields survive the trip
/// through plain text files.
#[must_use]
pub fn render_message(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}  {}", record.level.tag(), record.scope, record.message);
    if let Some(meta) = &record.metadata {
        line.push(' ');
        line.push_str(&meta.to_string());
    }
    line
}

/// The full persisted form: `{ISO-8601 timestamp} {formatted message}`.
#[must_use]
pub fn render_line(record: &LogRecord) -> String {
    format!("{} {}", timestamp(), render_message(record))
}
