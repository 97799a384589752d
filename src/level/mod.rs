//! Severity levels and the include/exclude filters that gate which messages
//! reach which transports.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation that would be too noisy outside of development.
    Trace = 0,
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug = 1,
    /// Normal operational milestones — connection established, config loaded, etc.
    #[default]
    Info = 2,
    /// Non-fatal anomalies that may need attention (deprecated features, retries).
    Warn = 3,
    /// Unrecoverable failures that prevent the operation from completing.
    Error = 4,
}

impl Level {
    /// Lowercase because config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Uppercase form used in rendered log lines (`[ERROR]`, `[INFO]`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Convenience for iteration — used by filters and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(crate::Error::InvalidLevel(s.to_string())),
        }
    }
}

/// Per-transport level filter.
///
/// Modeled as a tagged variant so the illegal "include and exclude both set"
/// state is unrepresentable; config translation rejects tables that set both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LevelFilter {
    /// No filter configured — every level is admitted.
    #[default]
    All,
    /// Only the listed levels are admitted.
    Include(Vec<Level>),
    /// Every level except the listed ones is admitted.
    Exclude(Vec<Level>),
}

impl LevelFilter {
    /// Whether a record at `level` passes this filter.
    #[must_use]
    pub fn admits(&self, level: Level) -> bool {
        match self {
            Self::All => true,
            Self::Include(levels) => levels.contains(&level),
            Self::Exclude(levels) => !levels.contains(&level),
        }
    }
}
