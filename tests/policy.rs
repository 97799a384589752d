use rotalog::{DateBucket, RotationConfig, needs_rotation};

#[test]
fn absent_file_never_rotates() {
    let config = RotationConfig::size(100);
    assert!(!needs_rotation(None, 1000, "", "", &config));
}

#[test]
fn size_rotates_when_entry_would_overflow() {
    let config = RotationConfig::size(100);
    assert!(needs_rotation(Some(90), 20, "", "", &config));
}

#[test]
fn size_allows_entry_up_to_the_limit() {
    let config = RotationConfig::size(100);
    // 90 + 5 = 95 <= 100
    assert!(!needs_rotation(Some(90), 5, "", "", &config));
    // 90 + 10 = 100, still within bounds
    assert!(!needs_rotation(Some(90), 10, "", "", &config));
    assert!(needs_rotation(Some(90), 11, "", "", &config));
}

#[test]
fn date_rotates_on_bucket_change() {
    let config = RotationConfig::date(DateBucket::Day);
    assert!(needs_rotation(
        Some(10),
        5,
        "2025-01-01",
        "2025-01-02",
        &config
    ));
}

#[test]
fn date_holds_within_same_bucket() {
    let config = RotationConfig::date(DateBucket::Day);
    assert!(!needs_rotation(
        Some(10),
        5,
        "2025-01-01",
        "2025-01-01",
        &config
    ));
}

#[test]
fn size_threshold_ignored_under_date_method() {
    // A date-method config carries a default max_size; it must not trigger.
    let config = RotationConfig::date(DateBucket::Day);
    assert!(!needs_rotation(
        Some(u64::MAX - 1),
        1,
        "2025-01-01",
        "2025-01-01",
        &config
    ));
}

#[test]
fn bucket_ignored_under_size_method() {
    let config = RotationConfig::size(100);
    assert!(!needs_rotation(
        Some(10),
        5,
        "2025-01-01",
        "2025-01-02",
        &config
    ));
}
