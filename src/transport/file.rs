//! Plain append-only file transport — a single-call I/O wrapper with no
//! rotation. Use [`crate::RotatingFileTransport`] when files must stay bounded.

use super::{LogRecord, Transport};
use crate::fmt;
use crate::internal;
use crate::level::{Level, LevelFilter};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Appends one rendered line per record, creating the file and its parent
/// directories on first use.
#[derive(Debug, Clone)]
pub struct FileTransport {
    name: String,
    path: PathBuf,
    filter: LevelFilter,
}

impl FileTransport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map_or_else(|| "file".to_string(), |s| s.to_string_lossy().into_owned());
        Self {
            name,
            path,
            filter: LevelFilter::All,
        }
    }

    /// Several file transports in one logger need distinct diagnostic names.
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

impl Transport for FileTransport {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let path = self.resolve_path();
        internal::trace("FILE", &format!("Writing to: {}", path.display()));

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            match fs::create_dir_all(parent) {
                Ok(()) => {
                    internal::debug("FILE", &format!("Created directory: {}", parent.display()));
                }
                Err(e) => {
                    internal::error(
                        "FILE",
                        &format!("Failed to create directory {}: {}", parent.display(), e),
                    );
                    return Err(e.into());
                }
            }
        }

        // Single write call so the line plus newline land together
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut content = fmt::render_line(record);
        content.push('\n');
        file.write_all(content.as_bytes())?;

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
