//! Date buckets — coarse time windows used both to detect rotation boundaries
//! and to name archived files, so the two can never drift apart.

use chrono::{DateTime, Local};
use std::str::FromStr;

/// Granularity of date-based rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBucket {
    /// One file per calendar day.
    #[default]
    Day,
    /// One file per hour.
    Hour,
    /// One file per calendar month.
    Month,
}

impl DateBucket {
    /// The strftime pattern backing this bucket.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Day => "%Y-%m-%d",
            Self::Hour => "%Y-%m-%d-%H",
            Self::Month => "%Y-%m",
        }
    }

    /// Lowercase because config files use lowercase bucket strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Month => "month",
        }
    }

    /// Formats an instant into this bucket's string key.
    ///
    /// Pure function of wall-clock time and granularity; used identically for
    /// boundary detection and archive naming.
    #[must_use]
    pub fn format(self, instant: &DateTime<Local>) -> String {
        instant.format(self.pattern()).to_string()
    }

    /// The bucket key for the current instant.
    #[must_use]
    pub fn now(self) -> String {
        self.format(&Local::now())
    }
}

impl FromStr for DateBucket {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "hour" | "hourly" => Ok(Self::Hour),
            "month" | "monthly" => Ok(Self::Month),
            _ => Err(crate::Error::InvalidDateBucket(s.to_string())),
        }
    }
}
