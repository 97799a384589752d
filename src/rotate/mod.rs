//! Rotating file transport — append-only log lines on disk, rotated by size
//! or calendar-date boundary, archived under count/age retention, with
//! graceful fallback when the filesystem denies access.

mod archive;
mod date;
mod fallback;
mod policy;
mod size;

pub use archive::rotate;
pub use date::DateBucket;
pub use policy::needs_rotation;
pub use size::{format_size, parse_size};

use crate::fmt;
use crate::internal;
use crate::level::{Level, LevelFilter};
use crate::transport::{LogRecord, Transport};

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size threshold: 10 MiB.
pub const DEFAULT_MAX_SIZE: u64 = 10 * 1024 * 1024;
/// Default number of kept rotated segments.
pub const DEFAULT_MAX_FILES: usize = 5;
/// Default archive retention in days.
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

/// What triggers a rotation. The two triggers are mutually exclusive: the
/// unused threshold field of [`RotationConfig`] never influences decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMethod {
    /// Rotate when the pending entry would push the file past `max_size`.
    Size,
    /// Rotate when "now" falls in a different date bucket than the last write.
    Date,
}

impl std::str::FromStr for RotationMethod {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "size" => Ok(Self::Size),
            "date" => Ok(Self::Date),
            _ => Err(crate::Error::InvalidRotationMethod(s.to_string())),
        }
    }
}

/// Immutable rotation settings, fixed at transport construction.
#[derive(Debug, Clone)]
pub struct RotationConfig {
    pub method: RotationMethod,
    /// Byte threshold; only meaningful under [`RotationMethod::Size`].
    pub max_size: u64,
    /// Boundary granularity; only meaningful under [`RotationMethod::Date`].
    pub bucket: DateBucket,
    /// `None` means "not explicitly set": size rotation falls back to
    /// [`DEFAULT_MAX_FILES`], and the date method skips its legacy
    /// active-directory trim pass.
    pub max_files: Option<usize>,
    /// `None` derives `<active dir>/<name>-archive` at construction.
    pub archive_dir: Option<PathBuf>,
    /// Gzip archived segments under the date method.
    pub compress: bool,
    /// Age bound for archived files; `0` means archives never expire.
    pub retention_days: u32,
}

impl RotationConfig {
    /// Size-triggered rotation at the given byte threshold.
    #[must_use]
    pub const fn size(max_size: u64) -> Self {
        Self {
            method: RotationMethod::Size,
            max_size,
            bucket: DateBucket::Day,
            max_files: None,
            archive_dir: None,
            compress: true,
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }

    /// Size-triggered rotation from a human-readable threshold ("10MB").
    ///
    /// # Errors
    /// `Error::InvalidSizeFormat` when the text is unparsable — surfaced here
    /// rather than silently defaulted, since it indicates a misconfiguration.
    pub fn size_str(max_size: &str) -> Result<Self, crate::Error> {
        Ok(Self::size(parse_size(max_size)?))
    }

    /// Date-triggered rotation at the given bucket granularity.
    #[must_use]
    pub const fn date(bucket: DateBucket) -> Self {
        Self {
            method: RotationMethod::Date,
            max_size: DEFAULT_MAX_SIZE,
            bucket,
            max_files: None,
            archive_dir: None,
            compress: true,
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }

    /// Bounds the number of rotated segments kept in the active directory.
    #[must_use]
    pub const fn max_files(mut self, n: usize) -> Self {
        self.max_files = Some(n);
        self
    }

    /// Overrides the derived archive location.
    #[must_use]
    pub fn archive_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.archive_dir = Some(dir.into());
        self
    }

    /// Toggles gzip compression of archived segments.
    #[must_use]
    pub const fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Age bound for archived files; `0` disables expiry.
    #[must_use]
    pub const fn retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Effective segment bound — the explicit value, or the default; never zero.
    #[must_use]
    pub fn kept_files(&self) -> usize {
        self.max_files.unwrap_or(DEFAULT_MAX_FILES).max(1)
    }
}

/// Mutable per-transport state, owned exclusively by one transport instance
/// behind its mutex. The path may move on permission fallback; the bucket
/// advances only when date rotation runs.
#[derive(Debug, Clone)]
pub struct ActiveFileState {
    /// Current absolute path of the active file.
    pub path: PathBuf,
    /// Last computed date-bucket key; unused under size rotation.
    pub current_bucket: String,
}

/// Result of one rotation pass. Warnings are also forwarded to the internal
/// diagnostic channel as they occur.
#[derive(Debug, Default)]
pub struct RotationOutcome {
    pub warnings: Vec<String>,
}

impl RotationOutcome {
    pub(crate) fn warn(&mut self, msg: String) {
        internal::warn("ROTATE", &msg);
        self.warnings.push(msg);
    }
}

/// File transport with size- or date-triggered rotation.
///
/// The mutex makes the stat-then-rotate-then-append sequence atomic per
/// instance within one process; rotation always completes before the entry
/// that triggered it is appended. Cross-process coordination over the same
/// path is out of scope.
pub struct RotatingFileTransport {
    name: String,
    config: RotationConfig,
    filter: LevelFilter,
    state: Mutex<ActiveFileState>,
}

impl RotatingFileTransport {
    /// Validates the path, sets up the active and archive directories (with
    /// permission-fallback relocation), and seeds the date bucket.
    ///
    /// # Errors
    /// `Error::InvalidPath` for an empty path or one containing `..`
    /// segments. Directory-creation failures are not errors: the transport
    /// relocates to a fallback directory, or degrades to write-time console
    /// fallback when every candidate fails.
    pub fn new(path: impl AsRef<Path>, config: RotationConfig) -> Result<Self, crate::Error> {
        let requested = expand(path.as_ref());
        fallback::validate_path(&requested)?;

        let name = requested
            .file_stem()
            .map_or_else(|| "log".to_string(), |s| s.to_string_lossy().into_owned());

        let active_path = Self::setup_active_dir(requested);
        let active_dir = active_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let mut config = config;
        let archive_dir = config
            .archive_dir
            .take()
            .map_or_else(|| active_dir.join(format!("{name}-archive")), |d| expand(&d));
        if let Err(e) = fs::create_dir_all(&archive_dir) {
            internal::warn(
                "ROTATE",
                &format!(
                    "cannot create archive directory {}: {e}",
                    archive_dir.display()
                ),
            );
        }
        config.archive_dir = Some(archive_dir);

        let current_bucket = config.bucket.now();
        internal::debug(
            "ROTATE",
            &format!("Transport '{name}' ready at {}", active_path.display()),
        );

        Ok(Self {
            name,
            config,
            filter: LevelFilter::All,
            state: Mutex::new(ActiveFileState {
                path: active_path,
                current_bucket,
            }),
        })
    }

    /// Identifies this transport in diagnostics and config lookups.
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

    /// The current active file path — differs from the requested path after a
    /// permission fallback relocated it.
    #[must_use]
    pub fn active_path(&self) -> PathBuf {
        self.lock_state().path.clone()
    }

    /// The resolved archive directory.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        archive::resolved_archive_dir(&self.config, &self.lock_state().path)
    }

    /// Ensures the requested directory is writable, relocating to the first
    /// usable fallback otherwise. Exhausting every candidate is warned, not
    /// fatal — writes then degrade to the console fallback.
    fn setup_active_dir(requested: PathBuf) -> PathBuf {
        let dir = requested
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let Err(e) = fallback::ensure_writable_dir(&dir) else {
            return requested;
        };
        internal::warn(
            "ROTATE",
            &format!("log directory {} unusable: {e}", dir.display()),
        );

        let file_name = requested
            .file_name()
            .map_or_else(|| std::ffi::OsString::from("rotalog.log"), std::ffi::OsStr::to_os_string);

        for candidate in fallback::fallback_dirs() {
            if fallback::ensure_writable_dir(&candidate).is_ok() {
                let relocated = candidate.join(&file_name);
                internal::warn(
                    "ROTATE",
                    &format!(
                        "relocating log file {} to {}",
                        requested.display(),
                        relocated.display()
                    ),
                );
                return relocated;
            }
        }

        internal::error(
            "ROTATE",
            &format!(
                "no writable log directory for {}; writes will fall back to console",
                requested.display()
            ),
        );
        requested
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ActiveFileState> {
        // A poisoned mutex only means another thread panicked mid-write; the
        // state itself (path + bucket string) is still coherent.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn append(path: &Path, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())
    }
}

impl Transport for RotatingFileTransport {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        if !self.should_log(record.level) {
            return Ok(());
        }

        let mut line = fmt::render_line(record);
        line.push('\n');

        let mut state = self.lock_state();
        let now_bucket = self.config.bucket.now();
        let active_size = fs::metadata(&state.path).ok().map(|m| m.len());

        if needs_rotation(
            active_size,
            line.len() as u64,
            &state.current_bucket,
            &now_bucket,
            &self.config,
        ) {
            internal::debug(
                "ROTATE",
                &format!("Rotating {} ({})", state.path.display(), self.name),
            );
            // Rotation must finish before the append so the entry never lands
            // in a file that should already have rotated.
            let _outcome = rotate(&self.config, &mut state);
        }

        if let Err(e) = Self::append(&state.path, &line) {
            internal::error(
                "ROTATE",
                &format!("append to {} failed: {e}", state.path.display()),
            );
            // The raw line is preserved on the console so no content is
            // silently dropped.
            let mut stderr = std::io::stderr().lock();
            let _ = stderr.write_all(line.as_bytes());
        }

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

/// Config values use `~` for portability — the OS needs an absolute path for
/// file operations.
fn expand(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.as_ref())
}
