use rotalog::{Error, Level, LogRecord, RotatingFileTransport, RotationConfig, Transport};

#[test]
fn empty_path_is_rejected() {
    let result = RotatingFileTransport::new("", RotationConfig::size(1024));
    assert!(matches!(result, Err(Error::InvalidPath(_))));
}

#[test]
fn parent_traversal_is_rejected() {
    let result = RotatingFileTransport::new("logs/../../etc/app.log", RotationConfig::size(1024));
    assert!(matches!(result, Err(Error::InvalidPath(_))));
}

#[cfg(unix)]
#[test]
fn unwritable_directory_relocates_to_fallback() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    let tmp = TempDir::new().unwrap();
    let locked = tmp.path().join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged processes ignore permission bits; nothing to exercise there.
    if fs::write(locked.join("probe"), b"x").is_ok() {
        return;
    }

    let file_name = format!("rotalog-fallback-{}.log", std::process::id());
    let requested = locked.join("logs").join(&file_name);

    // Construction must succeed despite the unusable directory.
    let transport = RotatingFileTransport::new(&requested, RotationConfig::size(1024)).unwrap();
    let active = transport.active_path();
    assert_ne!(active, requested);
    assert!(!active.starts_with(&locked));

    // A subsequent write lands in the fallback directory, not the original.
    transport
        .write(&LogRecord::new(Level::Info, "FB", "relocated"))
        .unwrap();
    assert!(active.exists());
    assert!(!requested.exists());

    let _ = fs::remove_file(&active);
    let _ = fs::remove_dir_all(transport.archive_path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}
