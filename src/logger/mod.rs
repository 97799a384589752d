//! Direct construction would require knowing every transport's internals —
//! the builder hides that behind a stepwise API, and the resulting Logger
//! fans out each record to all configured transports.

mod builder;
mod from_config;

pub use builder::{ConsoleBuilder, FileBuilder, JsonBuilder, LoggerBuilder};

use crate::level::Level;
use crate::transport::{LogRecord, Transport};

/// Immutable after build — thread-safe concurrent logging without extra locks.
#[derive(Default)]
pub struct Logger {
    min_level: Level,
    transports: Vec<Box<dyn Transport>>,
    pub(crate) app_name: Option<String>,
}

impl Logger {
    /// Direct construction would expose transport internals — the builder provides a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Core dispatch — filters by severity, then fans out to every transport
    /// that admits the level. Individual transport failures are ignored so one
    /// broken sink can't poison the others.
    pub fn log(&self, level: Level, scope: &str, msg: &str) {
        if level < self.min_level {
            return;
        }

        let record = LogRecord::new(level, scope, msg);
        self.dispatch(&record);
    }

    /// Structured fields travel with the record and render as compact JSON.
    pub fn log_with_meta(&self, level: Level, scope: &str, msg: &str, metadata: serde_json::Value) {
        if level < self.min_level {
            return;
        }

        let record = LogRecord::new(level, scope, msg).with_metadata(metadata);
        self.dispatch(&record);
    }

    fn dispatch(&self, record: &LogRecord) {
        for transport in &self.transports {
            if transport.should_log(record.level) {
                let _ = transport.write(record);
            }
        }
    }

    /// High-volume instrumentation that should vanish in production builds.
    pub fn trace(&self, scope: &str, msg: &str) {
        self.log(Level::Trace, scope, msg);
    }

    /// Development-time diagnostics that are too noisy for normal operation.
    pub fn debug(&self, scope: &str, msg: &str) {
        self.log(Level::Debug, scope, msg);
    }

    /// Normal operational milestones — config loaded, listener started, etc.
    pub fn info(&self, scope: &str, msg: &str) {
        self.log(Level::Info, scope, msg);
    }

    /// Non-fatal anomalies — missing optional config, deprecated features, recoverable errors.
    pub fn warn(&self, scope: &str, msg: &str) {
        self.log(Level::Warn, scope, msg);
    }

    /// Unrecoverable failures — I/O errors, invalid state, broken invariants.
    pub fn error(&self, scope: &str, msg: &str) {
        self.log(Level::Error, scope, msg);
    }

    /// Buffered transports may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all transports.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for transport in &self.transports {
            transport.flush()?;
        }
        Ok(())
    }

    /// Tests and diagnostics need to verify which severity threshold is active.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Tests verify the builder wired up the expected number of transports.
    #[must_use]
    pub fn transport_count(&self) -> usize {
        self.transports.len()
    }

    /// Application identity this logger was configured with, if any.
    #[must_use]
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }
}
