//! Console is the most common transport — immediate colored feedback without
//! configuring file paths.

use super::{LogRecord, Transport};
use crate::fmt::{self, color};
use crate::level::{Level, LevelFilter};
use std::io::{self, Write};

/// Writes rendered lines to stdout, with Warn and Error diverted to stderr so
/// piped output keeps diagnostics separate from data.
#[derive(Debug, Clone)]
pub struct ConsoleTransport {
    name: String,
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
    filter: LevelFilter,
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTransport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "console".to_string(),
            colors_enabled: true,
            filter: LevelFilter::All,
        }
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Several console transports in one logger need distinct diagnostic names.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restricts which severities this transport accepts.
    #[must_use]
    pub fn with_filter(mut self, filter: LevelFilter) -> Self {
        self.filter = filter;
        self
    }

    fn render(&self, record: &LogRecord) -> String {
        let ts = fmt::timestamp();
        if self.colors_enabled {
            let tag = color::colorize(
                &format!("[{}]", record.level.tag()),
                color::level_color(record.level),
            );
            let mut line = format!("{ts} {tag} {}  {}", record.scope, record.message);
            if let Some(meta) = &record.metadata {
                line.push(' ');
                line.push_str(&meta.to_string());
            }
            line
        } else {
            format!("{ts} {}", fmt::render_message(record))
        }
    }
}

impl Transport for ConsoleTransport {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let line = self.render(record);
        if record.level >= Level::Warn {
            let mut err = io::stderr().lock();
            writeln!(err, "{line}")?;
        } else {
            let mut out = io::stdout().lock();
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }

    fn should_log(&self, level: Level) -> bool {
        self.filter.admits(level)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
