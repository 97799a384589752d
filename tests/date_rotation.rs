use flate2::read::GzDecoder;
use rotalog::{ActiveFileState, DateBucket, RotationConfig, rotate};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STALE_BUCKET: &str = "2020-05-05";

fn stale_state(path: PathBuf) -> ActiveFileState {
    ActiveFileState {
        path,
        current_bucket: STALE_BUCKET.to_string(),
    }
}

fn date_config(archive: &Path) -> RotationConfig {
    RotationConfig::date(DateBucket::Day)
        .archive_dir(archive)
        .compress(false)
        .retention_days(0)
}

#[test]
fn date_rotation_archives_under_bucket_name() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    let archive = tmp.path().join("archive");
    fs::write(&active, "old day\n").unwrap();

    let mut state = stale_state(active.clone());
    let outcome = rotate(&date_config(&archive), &mut state);

    assert!(outcome.warnings.is_empty());
    assert!(!active.exists());
    let archived = archive.join(format!("app.{STALE_BUCKET}.log"));
    assert_eq!(fs::read_to_string(archived).unwrap(), "old day\n");
    // The recorded bucket advances to "now" so the next write starts fresh.
    assert_ne!(state.current_bucket, STALE_BUCKET);
}

#[test]
fn same_bucket_collision_gets_numeric_suffix() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    let archive = tmp.path().join("archive");
    let config = date_config(&archive);

    // Two rotations landing on the same bucket, as after a process restart.
    fs::write(&active, "first\n").unwrap();
    rotate(&config, &mut stale_state(active.clone()));

    fs::write(&active, "second\n").unwrap();
    rotate(&config, &mut stale_state(active.clone()));

    let plain = archive.join(format!("app.{STALE_BUCKET}.log"));
    let suffixed = archive.join(format!("app.{STALE_BUCKET}.1.log"));
    assert_eq!(fs::read_to_string(plain).unwrap(), "first\n");
    assert_eq!(fs::read_to_string(suffixed).unwrap(), "second\n");
}

#[test]
fn compressed_archive_round_trips() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    let archive = tmp.path().join("archive");
    fs::write(&active, "compress me\n").unwrap();

    let config = RotationConfig::date(DateBucket::Day)
        .archive_dir(&archive)
        .retention_days(0);
    let outcome = rotate(&config, &mut stale_state(active.clone()));
    assert!(outcome.warnings.is_empty());

    let gz = archive.join(format!("app.{STALE_BUCKET}.log.gz"));
    assert!(gz.exists());
    // Exactly one copy survives: no plain sibling, no active file.
    assert!(!archive.join(format!("app.{STALE_BUCKET}.log")).exists());
    assert!(!active.exists());

    let mut decoder = GzDecoder::new(fs::File::open(&gz).unwrap());
    let mut content = String::new();
    decoder.read_to_string(&mut content).unwrap();
    assert_eq!(content, "compress me\n");
}

#[test]
fn compressed_collision_check_sees_gz_siblings() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    let archive = tmp.path().join("archive");

    let config = RotationConfig::date(DateBucket::Day)
        .archive_dir(&archive)
        .retention_days(0);

    fs::write(&active, "first\n").unwrap();
    rotate(&config, &mut stale_state(active.clone()));
    fs::write(&active, "second\n").unwrap();
    rotate(&config, &mut stale_state(active.clone()));

    assert!(archive.join(format!("app.{STALE_BUCKET}.log.gz")).exists());
    assert!(archive.join(format!("app.{STALE_BUCKET}.1.log.gz")).exists());
}

#[test]
fn explicit_max_files_trims_active_directory() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    let archive = tmp.path().join("archive");
    fs::write(&active, "current\n").unwrap();

    // Date-suffixed leftovers that predate archiving, oldest first.
    for (i, name) in ["app.2020-01-01.log", "app.2020-01-02.log", "app.2020-01-03.log"]
        .into_iter()
        .enumerate()
    {
        let path = tmp.path().join(name);
        fs::write(&path, "legacy\n").unwrap();
        let mtime = filetime::FileTime::from_unix_time(1_577_836_800 + i as i64 * 86_400, 0);
        filetime::set_file_mtime(&path, mtime).unwrap();
    }

    let config = date_config(&archive).max_files(2);
    rotate(&config, &mut stale_state(active.clone()));

    // Only the two newest legacy files survive the trim.
    assert!(!tmp.path().join("app.2020-01-01.log").exists());
    assert!(tmp.path().join("app.2020-01-02.log").exists());
    assert!(tmp.path().join("app.2020-01-03.log").exists());
}

#[test]
fn unset_max_files_skips_the_trim_pass() {
    let tmp = TempDir::new().unwrap();
    let active = tmp.path().join("app.log");
    let archive = tmp.path().join("archive");
    fs::write(&active, "current\n").unwrap();

    for name in ["app.2020-01-01.log", "app.2020-01-02.log", "app.2020-01-03.log"] {
        fs::write(tmp.path().join(name), "legacy\n").unwrap();
    }

    rotate(&date_config(&archive), &mut stale_state(active.clone()));

    for name in ["app.2020-01-01.log", "app.2020-01-02.log", "app.2020-01-03.log"] {
        assert!(tmp.path().join(name).exists(), "{name} should be untouched");
    }
}
