//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::bail;
use filetext::boundary::to_wide;
use filetext::{FileTextUtility, LogSink, NativeBoundary};
use tempfile::TempDir;

/// Log sink that records every entry in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl RecordingLog {
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl LogSink for RecordingLog {
    fn append(&self, message: &str) -> anyhow::Result<()> {
        self.entries.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Log sink that always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingLog;

impl LogSink for FailingLog {
    fn append(&self, _message: &str) -> anyhow::Result<()> {
        bail!("message log is unwritable")
    }
}

/// Boundary over a recording log, plus a handle to inspect the entries
pub fn recording_boundary() -> (NativeBoundary<RecordingLog>, RecordingLog) {
    let log = RecordingLog::default();
    (NativeBoundary::new(FileTextUtility::new(log.clone())), log)
}

pub fn failing_boundary() -> NativeBoundary<FailingLog> {
    NativeBoundary::new(FileTextUtility::new(FailingLog))
}

/// UTF-16 form of a string
pub fn w(text: &str) -> Vec<u16> {
    to_wide(text)
}

/// UTF-16 form of a path
pub fn wp(path: &Path) -> Vec<u16> {
    to_wide(&path.to_string_lossy())
}

/// Decode a reply's UTF-16 text
pub fn text_of(text: &Option<Vec<u16>>) -> Option<String> {
    text.as_ref().map(|t| String::from_utf16(t).unwrap())
}

/// Temp dir with a file of the given content
pub fn file_with(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.txt");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
