//! Path validation and fallback-directory resolution. When the requested log
//! directory cannot be created or written, the transport relocates to the
//! first writable candidate from [`fallback_dirs`] instead of failing.

use crate::Error;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Rejects empty paths and parent-traversal segments.
///
/// # Errors
/// `Error::InvalidPath` when the path is empty or contains a `..` component.
pub(crate) fn validate_path(path: &Path) -> Result<(), Error> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPath("empty path".to_string()));
    }
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(Error::InvalidPath(format!(
            "path contains parent traversal: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Ordered OS-appropriate fallback locations: temp dir, a `logs` folder in the
/// user's home, a `logs` folder under the current working directory.
pub(crate) fn fallback_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![std::env::temp_dir()];
    if let Some(user_dirs) = directories::UserDirs::new() {
        dirs.push(user_dirs.home_dir().join("logs"));
    }
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join("logs"));
    }
    dirs
}

/// Creates the directory and probes it with a throwaway append-open, so an
/// existing but read-only directory fails here instead of at the first write.
pub(crate) fn ensure_writable_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let probe = dir.join(".rotalog-probe");
    OpenOptions::new().create(true).append(true).open(&probe)?;
    let _ = fs::remove_file(&probe);
    Ok(())
}
