//! Plain log files can't be efficiently queried for aggregates — JSONL gives
//! consumers a structured record stream without requiring a database.

use super::{LogRecord, Transport};
use crate::internal;
use crate::level::{Level, LevelFilter};

use chrono::Local;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use ulid::Ulid;

/// Flat structure optimized for JSONL — one object per line enables `grep` and `jq` queries.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// ULID is time-sortable and globally unique — no collisions even with concurrent writers.
    id: String,
    /// RFC 3339 is the most widely supported machine-readable timestamp format.
    ts: String,
    level: &'a str,
    scope: &'a str,
    msg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<&'a serde_json::Value>,
}

/// Append-only JSONL file — one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonTransport {
    name: String,
    path: PathBuf,
    filter: LevelFilter,
}

impl JsonTransport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            name: "json".to_string(),
            path: path.into(),
            filter: LevelFilter::All,
        }
    }

    /// Several JSONL transports in one logger need distinct diagnostic names.
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

    /// Config values use `~` for portability — the OS needs an absolute path for file operations.
    fn resolve_path(&self) -> PathBuf {
        let path_str = self.path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.as_ref())
    }
}

impl Transport for JsonTransport {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let path = self.resolve_path();
        internal::trace("JSON", &format!("Writing to: {}", path.display()));

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let entry = JsonEntry {
            id: Ulid::new().to_string(),
            ts: Local::now().to_rfc3339(),
            level: record.level.as_str(),
            scope: &record.scope,
            msg: &record.message,
            meta: record.metadata.as_ref(),
        };
        let json = serde_json::to_string(&entry)?;

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{json}")?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }

    fn should_log(&self, level: Level) -> bool {
        self.filter.admits(level)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
