use rotalog::{ConsoleTransport, FileTransport, JsonTransport, Level, LogRecord, Transport};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn file_transport_appends_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("plain.log");

    let transport = FileTransport::new(&path);
    transport
        .write(&LogRecord::new(Level::Info, "S", "one"))
        .unwrap();
    transport
        .write(&LogRecord::new(Level::Info, "S", "two"))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("one"));
    assert!(lines[1].contains("two"));
}

#[test]
fn file_transport_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("deep").join("plain.log");

    FileTransport::new(&path)
        .write(&LogRecord::new(Level::Info, "S", "created"))
        .unwrap();

    assert!(path.exists());
}

#[test]
fn file_transport_renders_metadata_as_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("meta.log");

    let record =
        LogRecord::new(Level::Warn, "DB", "slow query").with_metadata(json!({"ms": 250}));
    FileTransport::new(&path).write(&record).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[WARN] DB  slow query"));
    assert!(content.contains(r#"{"ms":250}"#));
}

#[test]
fn json_transport_writes_one_object_per_line() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("db.jsonl");

    let transport = JsonTransport::new(&path);
    transport
        .write(&LogRecord::new(Level::Error, "NET", "refused").with_metadata(json!({"port": 443})))
        .unwrap();
    transport
        .write(&LogRecord::new(Level::Info, "NET", "retry"))
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let entries: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["level"], "error");
    assert_eq!(entries[0]["scope"], "NET");
    assert_eq!(entries[0]["msg"], "refused");
    assert_eq!(entries[0]["meta"]["port"], 443);
    assert!(entries[0]["id"].as_str().unwrap().len() == 26);
    assert!(entries[1].get("meta").is_none());
}

#[test]
fn transport_filters_gate_should_log() {
    use rotalog::LevelFilter;

    let transport = ConsoleTransport::new()
        .with_filter(LevelFilter::Exclude(vec![Level::Trace, Level::Debug]));

    assert!(!transport.should_log(Level::Trace));
    assert!(!transport.should_log(Level::Debug));
    assert!(transport.should_log(Level::Info));
    assert!(transport.should_log(Level::Error));
}

#[test]
fn console_transport_writes_without_error() {
    let transport = ConsoleTransport::new().colors(false);
    transport
        .write(&LogRecord::new(Level::Info, "SMOKE", "console line"))
        .unwrap();
    transport.flush().unwrap();
}

#[test]
fn transport_names_default_sensibly() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(ConsoleTransport::new().name(), "console");
    assert_eq!(
        FileTransport::new(tmp.path().join("audit.log")).name(),
        "audit"
    );
    assert_eq!(
        JsonTransport::new(tmp.path().join("db.jsonl"))
            .with_name("records")
            .name(),
        "records"
    );
}
