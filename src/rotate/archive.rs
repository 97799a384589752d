//! Rotation execution — renames the active file into a numbered or
//! date-suffixed archive slot, optionally compresses it, and enforces count
//! and age retention. Every filesystem operation here is individually
//! guarded: a failure degrades to a warning and the rotation continues.

use super::{ActiveFileState, RotationConfig, RotationMethod, RotationOutcome};
use crate::internal;

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Executes one rotation pass: archive-directory setup, the method-specific
/// move, retention cleanup, and (under the date method, when `max_files` was
/// explicitly set) the legacy trim of date-suffixed files in the active
/// directory.
///
/// Best-effort throughout: the outcome carries warnings, never errors, so the
/// caller's logging path is never interrupted.
pub fn rotate(config: &RotationConfig, state: &mut ActiveFileState) -> RotationOutcome {
    let mut outcome = RotationOutcome::default();
    let archive_dir = resolved_archive_dir(config, &state.path);

    // The archive directory must exist before any move lands in it; if it
    // cannot be created the whole rotation degrades to a no-op.
    if let Err(e) = fs::create_dir_all(&archive_dir) {
        outcome.warn(format!(
            "cannot create archive directory {}: {e}; rotation skipped",
            archive_dir.display()
        ));
        return outcome;
    }

    match config.method {
        RotationMethod::Size => rotate_by_size(&mut outcome, config, &state.path, &archive_dir),
        RotationMethod::Date => rotate_by_date(&mut outcome, config, state, &archive_dir),
    }

    apply_retention(&mut outcome, config, &archive_dir);

    if config.method == RotationMethod::Date && config.max_files.is_some() {
        trim_active_dir(&mut outcome, &state.path, config.kept_files());
    }

    outcome
}

/// The explicit archive directory, or `<active dir>/<stem>-archive` when none
/// was configured.
pub(super) fn resolved_archive_dir(config: &RotationConfig, active: &Path) -> PathBuf {
    config.archive_dir.clone().unwrap_or_else(|| {
        let (stem, _) = split_name(active);
        active_dir(active).join(format!("{stem}-archive"))
    })
}

fn active_dir(active: &Path) -> PathBuf {
    active
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Splits "app.log" into ("app", ".log"); extension-less names get an empty suffix.
fn split_name(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map_or_else(|| "log".to_string(), |s| s.to_string_lossy().into_owned());
    let ext = path
        .extension()
        .map_or_else(String::new, |e| format!(".{}", e.to_string_lossy()));
    (stem, ext)
}

/// Shift chain `name.1.ext … name.N.ext`: the oldest kept segment is evicted
/// into the archive, the rest move one index up, and the active file becomes
/// `name.1.ext`. The next append recreates the active file lazily.
fn rotate_by_size(
    outcome: &mut RotationOutcome,
    config: &RotationConfig,
    active: &Path,
    archive_dir: &Path,
) {
    let dir = active_dir(active);
    let (stem, ext) = split_name(active);
    let max = config.kept_files();

    for i in (1..max).rev() {
        let numbered = dir.join(format!("{stem}.{i}{ext}"));
        if !numbered.exists() {
            continue;
        }

        let dest = if i == max - 1 {
            // Oldest kept slot leaves the active directory entirely.
            archive_dir.join(format!("{stem}.{i}{ext}"))
        } else {
            dir.join(format!("{stem}.{}{ext}", i + 1))
        };

        // One failed rename must not abort the remaining shifts.
        if let Err(e) = fs::rename(&numbered, &dest) {
            outcome.warn(format!(
                "cannot move {} to {}: {e}",
                numbered.display(),
                dest.display()
            ));
        }
    }

    let first = dir.join(format!("{stem}.1{ext}"));
    if let Err(e) = fs::rename(active, &first) {
        outcome.warn(format!(
            "cannot rotate {} to {}: {e}",
            active.display(),
            first.display()
        ));
    }
}

/// Moves (and optionally compresses) the active file into the archive under
/// `name.{bucket}.ext`, suffixing `.1`, `.2`, … when earlier rotations already
/// landed on the same bucket, then advances the recorded bucket to "now".
fn rotate_by_date(
    outcome: &mut RotationOutcome,
    config: &RotationConfig,
    state: &mut ActiveFileState,
    archive_dir: &Path,
) {
    let (stem, ext) = split_name(&state.path);
    let base = format!("{stem}.{}", state.current_bucket);

    let mut candidate = archive_dir.join(format!("{base}{ext}"));
    let mut n = 0_u32;
    while candidate.exists() || gz_sibling(&candidate).exists() {
        n += 1;
        candidate = archive_dir.join(format!("{base}.{n}{ext}"));
    }

    if config.compress {
        let gz_path = gz_sibling(&candidate);
        if let Err(e) = compress_into(&state.path, &gz_path) {
            outcome.warn(format!(
                "compression of {} failed: {e}; archiving uncompressed",
                state.path.display()
            ));
            // A partial .gz plus the original would be two copies of the data.
            let _ = fs::remove_file(&gz_path);
            plain_move(outcome, &state.path, &candidate);
        } else {
            internal::debug(
                "ROTATE",
                &format!("Archived {} as {}", state.path.display(), gz_path.display()),
            );
        }
    } else {
        plain_move(outcome, &state.path, &candidate);
    }

    state.current_bucket = config.bucket.now();
}

fn plain_move(outcome: &mut RotationOutcome, src: &Path, dest: &Path) {
    if let Err(e) = fs::rename(src, dest) {
        outcome.warn(format!(
            "cannot archive {} to {}: {e}",
            src.display(),
            dest.display()
        ));
    }
}

fn gz_sibling(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.gz", path.display()))
}

/// Streams the source through a gzip encoder into `dest_gz`, then removes the
/// source so exactly one copy of the data remains.
fn compress_into(src: &Path, dest_gz: &Path) -> Result<(), crate::Error> {
    let input = File::open(src)?;
    let mut reader = BufReader::new(input);

    let output = File::create(dest_gz)?;
    let writer = BufWriter::new(output);
    let mut encoder = GzEncoder::new(writer, Compression::default());

    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        encoder.write_all(&buffer[..bytes_read])?;
    }
    let mut writer = encoder.finish()?;
    writer.flush()?;

    fs::remove_file(src)?;
    Ok(())
}

/// Deletes archived files whose modification time has fallen past the
/// retention cutoff. `retention_days == 0` disables the check entirely.
fn apply_retention(outcome: &mut RotationOutcome, config: &RotationConfig, archive_dir: &Path) {
    if config.retention_days == 0 {
        return;
    }

    let age = Duration::from_secs(u64::from(config.retention_days) * 86_400);
    let Some(cutoff) = SystemTime::now().checked_sub(age) else {
        // A retention window reaching past the epoch can never expire anything.
        return;
    };

    let entries = match fs::read_dir(archive_dir) {
        Ok(entries) => entries,
        Err(e) => {
            outcome.warn(format!(
                "cannot scan archive directory {}: {e}",
                archive_dir.display()
            ));
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        let Ok(modified) = meta.modified() else {
            continue;
        };

        if modified < cutoff {
            internal::debug("ROTATE", &format!("Expiring archive: {}", path.display()));
            // One undeletable file must not stop the scan of the rest.
            if let Err(e) = fs::remove_file(&path) {
                outcome.warn(format!("cannot expire {}: {e}", path.display()));
            }
        }
    }
}

/// Legacy bound for date-suffixed files that predate archiving: everything in
/// the active directory matching `name.*.ext` (other than the active file)
/// beyond `max` is deleted, oldest modification time first.
fn trim_active_dir(outcome: &mut RotationOutcome, active: &Path, max: usize) {
    let dir = active_dir(active);
    let (stem, ext) = split_name(active);
    let prefix = format!("{stem}.");
    let active_name = active
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());

    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            outcome.warn(format!("cannot scan {}: {e}", dir.display()));
            return;
        }
    };

    let mut siblings: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == active_name || !name.starts_with(&prefix) || !name.ends_with(&ext) {
            continue;
        }
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        siblings.push((entry.path(), modified));
    }

    if siblings.len() <= max {
        return;
    }

    siblings.sort_by_key(|(_, modified)| *modified);
    let excess = siblings.len() - max;
    for (path, _) in siblings.into_iter().take(excess) {
        internal::debug("ROTATE", &format!("Trimming: {}", path.display()));
        if let Err(e) = fs::remove_file(&path) {
            outcome.warn(format!("cannot trim {}: {e}", path.display()));
        }
    }
}
