//! Rotalog's own diagnostic channel — rotation warnings, fallback notices, and
//! directory-creation failures are reported here instead of being raised into
//! the host application's logging path.
//!
//! Uses `OnceLock` so the threshold is set exactly once, even if multiple
//! entry points (library consumers, tests) race to call `init`.

use crate::level::Level;
use std::io::Write;
use std::sync::OnceLock;

static DIAG_LEVEL: OnceLock<Level> = OnceLock::new();

/// Sets the minimum severity for diagnostic output.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init(level: Level) {
    let _ = DIAG_LEVEL.set(level);
}

/// Warn keeps rotation and fallback notices visible without drowning callers
/// in per-write trace output.
fn threshold() -> Level {
    DIAG_LEVEL.get().copied().unwrap_or(Level::Warn)
}

/// Diagnostics go to stderr so they never interleave with transport output on stdout.
fn log(level: Level, scope: &str, msg: &str) {
    if level < threshold() {
        return;
    }
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "rotalog: [{}] {scope} {msg}", level.tag());
}

/// Visible only when the diagnostic level includes Trace — per-write instrumentation.
pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Visible only when the diagnostic level includes Debug — rotation and setup details.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal operational milestones — directories created, retention pass complete.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies — failed renames, fallback relocation, skipped compression.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Unrecoverable failures within one operation — append errors, exhausted fallbacks.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
