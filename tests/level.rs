use rotalog::{Level, LevelFilter};
use std::str::FromStr;

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_from_str() {
    assert_eq!(Level::from_str("trace").unwrap(), Level::Trace);
    assert_eq!(Level::from_str("INFO").unwrap(), Level::Info);
    assert_eq!(Level::from_str("warning").unwrap(), Level::Warn);
    assert_eq!(Level::from_str("err").unwrap(), Level::Error);
    assert!(Level::from_str("critical").is_err());
}

#[test]
fn level_round_trip() {
    for level in Level::all() {
        assert_eq!(Level::from_str(level.as_str()).unwrap(), level);
    }
}

#[test]
fn filter_all_admits_everything() {
    let filter = LevelFilter::All;
    for level in Level::all() {
        assert!(filter.admits(level));
    }
}

#[test]
fn filter_include_admits_only_listed() {
    let filter = LevelFilter::Include(vec![Level::Error, Level::Warn]);
    assert!(filter.admits(Level::Error));
    assert!(filter.admits(Level::Warn));
    assert!(!filter.admits(Level::Info));
    assert!(!filter.admits(Level::Debug));
    assert!(!filter.admits(Level::Trace));
}

#[test]
fn filter_exclude_admits_all_but_listed() {
    let filter = LevelFilter::Exclude(vec![Level::Trace, Level::Debug]);
    assert!(!filter.admits(Level::Trace));
    assert!(!filter.admits(Level::Debug));
    assert!(filter.admits(Level::Info));
    assert!(filter.admits(Level::Warn));
    assert!(filter.admits(Level::Error));
}

#[test]
fn default_filter_is_all() {
    assert_eq!(LevelFilter::default(), LevelFilter::All);
}
