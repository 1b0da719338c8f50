//! Integration tests for the dated message log
//!
//! Drives failures through the boundary with a real `DatedFileLog` pointed at a
//! temp dir, then inspects the file on disk.

mod common;

use chrono::Local;
use filetext::{DatedFileLog, FileTextUtility, NativeBoundary, ShimConfig};

use common::{w, wp};

fn todays_log(log: &DatedFileLog) -> String {
    let path = log.path_for(&Local::now()).unwrap();
    std::fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn test_failures_land_in_dated_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = DatedFileLog::in_dir(dir.path());
    let boundary = NativeBoundary::new(FileTextUtility::new(log.clone()));

    let missing = dir.path().join("missing.txt");
    assert!(!boundary.clean_file(&wp(&missing)));

    let file_name = log.file_name_for(Local::now().date_naive());
    assert!(file_name.starts_with("Messages"));
    assert!(file_name.ends_with(".log"));
    assert!(dir.path().join(&file_name).exists());

    let content = todays_log(&log);
    assert!(content.contains(": Deleting file at path "));
    assert!(content.contains("failed because of:"));
    assert!(content.contains("file not found"));
}

#[test]
fn test_log_message_appends_timestamped_entries() {
    let dir = tempfile::tempdir().unwrap();
    let log = DatedFileLog::in_dir(dir.path());
    let boundary = NativeBoundary::new(FileTextUtility::new(log.clone()));

    assert!(boundary.log_message(&w("one")));
    assert!(boundary.log_message(&w("two")));

    let content = todays_log(&log);
    let entries: Vec<&str> = content.lines().collect();
    assert_eq!(entries.len(), 2);
    for (entry, message) in entries.iter().zip(["one", "two"]) {
        // "HH:MM: message"
        let (time, rest) = entry.split_at(5);
        assert_eq!(time.as_bytes()[2], b':');
        assert_eq!(rest, format!(": {}", message));
    }
}

#[test]
fn test_guard_rejections_are_not_logged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two.txt");
    std::fs::write(&path, "a\nb\n").unwrap();
    let log = DatedFileLog::in_dir(dir.path().join("logs"));
    let boundary = NativeBoundary::new(FileTextUtility::new(log.clone()));

    assert_eq!(boundary.read_line(&wp(&path), -5).status, -1);
    assert_eq!(boundary.read_line(&wp(&path), 2).status, -3);
    assert_eq!(todays_log(&log), "");
}

#[test]
fn test_config_drives_log_naming() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        format!(
            "log_dir: {}\nlog_file_prefix: Shim\n",
            dir.path().join("out").display()
        ),
    )
    .unwrap();

    let config = ShimConfig::load_from(&config_path);
    let log = DatedFileLog::from_config(&config);
    let boundary = NativeBoundary::new(FileTextUtility::new(log.clone()));
    assert!(boundary.log_message(&w("configured")));

    let expected = dir
        .path()
        .join("out")
        .join(log.file_name_for(Local::now().date_naive()));
    assert!(expected.file_name().unwrap().to_string_lossy().starts_with("Shim"));
    assert!(std::fs::read_to_string(expected).unwrap().contains(": configured"));
}
