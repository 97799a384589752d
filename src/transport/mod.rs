//! The built-in backends (console, file, JSONL, rotating file) can't cover
//! every use case — the `Transport` trait lets users add custom destinations
//! without modifying rotalog itself.

mod console;
mod file;
mod json;

pub use console::ConsoleTransport;
pub use file::FileTransport;
pub use json::JsonTransport;

use crate::level::Level;

/// Carries all data a transport needs to render one log line — avoids passing
/// loose parameters through every dispatch layer.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// Class or component context the owning logger was created for.
    pub scope: String,
    pub message: String,
    /// Structured fields appended to the rendered line as compact JSON.
    pub metadata: Option<serde_json::Value>,
}

impl LogRecord {
    /// Metadata-free records are the common case — a dedicated constructor keeps call sites short.
    #[must_use]
    pub fn new(level: Level, scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            scope: scope.into(),
            message: message.into(),
            metadata: None,
        }
    }

    /// Attaches structured fields to the record.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// `Send + Sync` bounds enable concurrent logging from multiple threads
/// through the same trait object.
pub trait Transport: Send + Sync {
    /// Each backend renders the record according to its own format (ANSI, plain text, JSON).
    ///
    /// # Errors
    /// I/O errors from the underlying sink. The rotating transport contains
    /// its own failures and reports `Ok` after falling back to the console.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// Buffered backends may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;

    /// Per-transport level gate, consulted by the logger before `write`.
    fn should_log(&self, _level: Level) -> bool {
        true
    }

    /// Identifies the transport in diagnostics and config lookups.
    fn name(&self) -> &str;
}
