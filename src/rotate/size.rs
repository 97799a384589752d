//! Config files specify rotation thresholds as "10MB" or "1G" but the policy
//! operates on raw bytes — these two functions bridge that gap.

use crate::Error;
use regex::Regex;
use std::sync::LazyLock;

/// `number + optional unit`, anchored — anything outside this shape is a misconfiguration.
static SIZE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*([a-z]*)\s*$").expect("Invalid size regex"));

/// Parses a human-readable size ("10MB", "1G", "500") into a byte count.
///
/// Units are binary (1024-based), case-insensitive, and the trailing `B` is
/// optional ("10K" == "10KB"). Fractional results truncate toward zero.
///
/// # Errors
/// `Error::InvalidSizeFormat` when the text does not match the
/// `number + unit` grammar or the unit is unrecognized.
pub fn parse_size(s: &str) -> Result<u64, Error> {
    let caps = SIZE_REGEX
        .captures(s)
        .ok_or_else(|| Error::InvalidSizeFormat(s.to_string()))?;

    let multiplier: f64 = match caps[2].to_uppercase().as_str() {
        "" | "B" => 1.0,
        "K" | "KB" => 1024.0,
        "M" | "MB" => 1024.0 * 1024.0,
        "G" | "GB" => 1024.0 * 1024.0 * 1024.0,
        "T" | "TB" => 1024.0 * 1024.0 * 1024.0 * 1024.0,
        _ => return Err(Error::InvalidSizeFormat(s.to_string())),
    };

    let number: f64 = caps[1]
        .parse()
        .map_err(|_| Error::InvalidSizeFormat(s.to_string()))?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bytes = (number * multiplier) as u64;
    Ok(bytes)
}

/// Raw byte counts are unreadable in diagnostics.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes as f64;

    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.2} GB", bytes_f / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.2} MB", bytes_f / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.2} KB", bytes_f / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
