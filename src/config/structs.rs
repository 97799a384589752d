//! Configuration struct definitions.

use crate::level::{Level, LevelFilter};
use crate::rotate::{DateBucket, RotationConfig, RotationMethod};
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Application name.
    pub app_name: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            app_name: None,
        }
    }
}

/// One `[transports.<name>]` table. Which fields matter depends on `type`:
/// `console` reads `colors`; `file` and `json` read `path`; `log` (rotating
/// file) reads `path`, `method`, `max_size`, `max_files`, `date_format`, and
/// the nested `archive` table.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TransportConfig {
    /// Transport kind: `console`, `file`, `json`, or `log`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Target file for file-backed transports.
    pub path: Option<String>,
    /// ANSI colors (console only).
    pub colors: Option<bool>,
    /// Rotation trigger: `size` or `date`.
    pub method: Option<String>,
    /// Size threshold in "10MB" notation.
    pub max_size: Option<String>,
    /// Bound on rotated segments kept in the active directory.
    pub max_files: Option<usize>,
    /// Date bucket granularity: `day`, `hour`, or `month`.
    pub date_format: Option<String>,
    /// Admit only these levels. Mutually exclusive with `exclude`.
    pub include: Vec<String>,
    /// Admit all but these levels. Mutually exclusive with `include`.
    pub exclude: Vec<String>,
    /// Archive settings for the rotating transport.
    pub archive: Option<ArchiveConfig>,
}

/// Nested `[transports.<name>.archive]` table.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Destination directory for rotated segments.
    pub directory: Option<String>,
    /// Gzip archived segments.
    pub compress: Option<bool>,
    /// Age bound in days; 0 means archives never expire.
    pub retention_days: Option<u32>,
}

impl TransportConfig {
    /// Builds the level filter for this transport.
    ///
    /// # Errors
    /// `ConflictingLevelFilter` when both `include` and `exclude` are set;
    /// `InvalidLevel` for an unrecognized level name.
    pub fn level_filter(&self, name: &str) -> Result<LevelFilter, crate::Error> {
        if !self.include.is_empty() && !self.exclude.is_empty() {
            return Err(crate::Error::ConflictingLevelFilter(name.to_string()));
        }

        let parse = |levels: &[String]| -> Result<Vec<Level>, crate::Error> {
            levels.iter().map(|s| s.parse()).collect()
        };

        if !self.include.is_empty() {
            Ok(LevelFilter::Include(parse(&self.include)?))
        } else if !self.exclude.is_empty() {
            Ok(LevelFilter::Exclude(parse(&self.exclude)?))
        } else {
            Ok(LevelFilter::All)
        }
    }

    /// Translates this table 1:1 into a [`RotationConfig`].
    ///
    /// Shape errors surface here, at translation time, rather than silently
    /// defaulting: a bad `method`, `max_size`, or `date_format` indicates a
    /// misconfiguration the operator needs to see.
    ///
    /// # Errors
    /// `InvalidRotationMethod`, `InvalidSizeFormat`, or `InvalidDateBucket`.
    pub fn rotation_config(&self) -> Result<RotationConfig, crate::Error> {
        let method: RotationMethod = self.method.as_deref().unwrap_or("size").parse()?;

        let mut config = match method {
            RotationMethod::Size => match &self.max_size {
                Some(text) => RotationConfig::size_str(text)?,
                None => RotationConfig::size(crate::rotate::DEFAULT_MAX_SIZE),
            },
            RotationMethod::Date => {
                let bucket: DateBucket = self
                    .date_format
                    .as_deref()
                    .map(str::parse)
                    .transpose()?
                    .unwrap_or_default();
                RotationConfig::date(bucket)
            }
        };

        if let Some(n) = self.max_files {
            config = config.max_files(n);
        }
        if let Some(archive) = &self.archive {
            if let Some(dir) = &archive.directory {
                config = config.archive_dir(dir.as_str());
            }
            if let Some(compress) = archive.compress {
                config = config.compress(compress);
            }
            if let Some(days) = archive.retention_days {
                config = config.retention_days(days);
            }
        }

        Ok(config)
    }
}
