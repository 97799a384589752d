#![forbid(unsafe_code)]

//! `rotalog` - Structured logging library with rotating file transports.
//!
//! A configurable logging library with support for:
//! - Multiple transport backends (console, file, JSONL, rotating file)
//! - Size- and date-triggered log rotation with archiving, gzip compression,
//!   and count/age retention
//! - Include/exclude level filtering per transport
//! - Builder pattern for programmatic configuration
//! - TOML configuration files
//!
//! # Example
//!
//! ```
//! use rotalog::{Logger, Level};
//!
//! let logger = Logger::builder()
//!     .level(Level::Debug)
//!     .console()
//!         .colors(true)
//!         .done()
//!     .build();
//!
//! logger.info("MAIN", "Application started");
//! logger.debug("NET", "Connecting to server...");
//! logger.warn("NET", "Connection timeout");
//! logger.error("NET", "Connection failed");
//! ```
//!
//! # Rotation
//!
//! ```no_run
//! use rotalog::{Logger, RotatingFileTransport, RotationConfig};
//!
//! let rotating = RotatingFileTransport::new(
//!     "logs/app.log",
//!     RotationConfig::size_str("10MB")?.max_files(5),
//! )?;
//!
//! let logger = Logger::builder().transport(rotating).build();
//! logger.info("MAIN", "lands in logs/app.log, rotated at 10 MiB");
//! # Ok::<(), rotalog::Error>(())
//! ```

pub mod config;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod rotate;
pub mod transport;

mod error;

pub use config::Config;
pub use error::Error;
pub use level::{Level, LevelFilter};
pub use logger::{Logger, LoggerBuilder};
pub use rotate::{
    ActiveFileState, DateBucket, RotatingFileTransport, RotationConfig, RotationMethod,
    RotationOutcome, format_size, needs_rotation, parse_size, rotate,
};
pub use transport::{ConsoleTransport, FileTransport, JsonTransport, LogRecord, Transport};
