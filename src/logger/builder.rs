//! Direct Logger construction would require knowing every transport's
//! internals — the builder hides that behind a stepwise API.

use super::Logger;
use crate::level::{Level, LevelFilter};
use crate::transport::{ConsoleTransport, FileTransport, JsonTransport, Transport};
use std::path::PathBuf;

/// Collects transports and the minimum level before the immutable build.
#[derive(Default)]
pub struct LoggerBuilder {
    pub(super) min_level: Level,
    pub(super) transports: Vec<Box<dyn Transport>>,
    pub(super) app_name: Option<String>,
}

impl LoggerBuilder {
    /// Info is a safe default for production — Debug/Trace are opt-in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            transports: Vec::new(),
            app_name: None,
        }
    }

    /// Noisy low-level messages slow down production output.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Application identity, used by config-driven setups for default paths.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Console output has its own concerns (colors, stderr routing) needing a dedicated sub-builder.
    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            transport: ConsoleTransport::new(),
        }
    }

    /// Plain file output has its own concerns (path, filtering) needing a dedicated sub-builder.
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> FileBuilder {
        FileBuilder {
            parent: self,
            transport: FileTransport::new(path),
        }
    }

    /// JSONL output has its own concerns (path, filtering) needing a dedicated sub-builder.
    #[must_use]
    pub fn json(self, path: impl Into<PathBuf>) -> JsonBuilder {
        JsonBuilder {
            parent: self,
            transport: JsonTransport::new(path),
        }
    }

    /// Escape hatch for pre-constructed transports — custom backends and the
    /// rotating file transport (whose construction is fallible) enter here.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transports.push(Box::new(transport));
        self
    }

    /// Immutability after build guarantees thread-safe concurrent logging.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            min_level: self.min_level,
            transports: self.transports,
            app_name: self.app_name,
        }
    }
}

/// Console output has its own set of concerns separate from file transports.
pub struct ConsoleBuilder {
    parent: LoggerBuilder,
    transport: ConsoleTransport,
}

impl ConsoleBuilder {
    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.transport = self.transport.colors(enabled);
        self
    }

    /// Restricts which severities this transport accepts.
    #[must_use]
    pub fn filter(mut self, filter: LevelFilter) -> Self {
        self.transport = self.transport.with_filter(filter);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more transports.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.transports.push(Box::new(self.transport));
        self.parent
    }
}

/// Plain append-file output, no rotation.
pub struct FileBuilder {
    parent: LoggerBuilder,
    transport: FileTransport,
}

impl FileBuilder {
    /// Restricts which severities this transport accepts.
    #[must_use]
    pub fn filter(mut self, filter: LevelFilter) -> Self {
        self.transport = self.transport.with_filter(filter);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more transports.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.transports.push(Box::new(self.transport));
        self.parent
    }
}

/// JSONL record-stream output.
pub struct JsonBuilder {
    parent: LoggerBuilder,
    transport: JsonTransport,
}

impl JsonBuilder {
    /// Restricts which severities this transport accepts.
    #[must_use]
    pub fn filter(mut self, filter: LevelFilter) -> Self {
        self.transport = self.transport.with_filter(filter);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more transports.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.transports.push(Box::new(self.transport));
        self.parent
    }
}
