//! Pure rotation decision logic. Never touches the filesystem beyond the
//! size/existence facts passed in, so tests inject sizes and bucket keys
//! directly instead of mocking clocks or disks.

use super::{RotationConfig, RotationMethod};

/// Whether the pending entry requires a rotation before it is appended.
///
/// - `active_size` is `None` when the active file does not exist — nothing to
///   rotate; the writer simply creates it.
/// - Size method: true iff the pending entry would push the file past the
///   configured maximum.
/// - Date method: true iff "now" falls in a different bucket than the last
///   recorded one.
#[must_use]
pub fn needs_rotation(
    active_size: Option<u64>,
    pending_bytes: u64,
    last_bucket: &str,
    now_bucket: &str,
    config: &RotationConfig,
) -> bool {
    let Some(current_size) = active_size else {
        return false;
    };

    match config.method {
        RotationMethod::Size => current_size.saturating_add(pending_bytes) > config.max_size,
        RotationMethod::Date => now_bucket != last_bucket,
    }
}
