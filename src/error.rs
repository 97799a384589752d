//! Unified error type for all rotalog operations.

/// Error type for rotalog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// JSON serialization error.
    Json(serde_json::Error),
    /// Empty path or path containing parent-traversal segments.
    InvalidPath(String),
    /// Size string does not match the `number + unit` grammar.
    InvalidSizeFormat(String),
    /// Unrecognized rotation method string.
    InvalidRotationMethod(String),
    /// Unrecognized date bucket string.
    InvalidDateBucket(String),
    /// Invalid log level string.
    InvalidLevel(String),
    /// A transport configured both an include and an exclude level list.
    ConflictingLevelFilter(String),
    /// Unrecognized transport `type` in configuration.
    UnknownTransportType(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
            Self::InvalidSizeFormat(s) => write!(f, "invalid size format: '{s}'"),
            Self::InvalidRotationMethod(s) => write!(f, "invalid rotation method: '{s}'"),
            Self::InvalidDateBucket(s) => write!(f, "invalid date bucket: '{s}'"),
            Self::InvalidLevel(s) => write!(f, "invalid level: '{s}'"),
            Self::ConflictingLevelFilter(name) => {
                write!(f, "transport '{name}' sets both include and exclude levels")
            }
            Self::UnknownTransportType(s) => write!(f, "unknown transport type: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
