//! Native-facing boundary
//!
//! Converts UTF-16 arguments to UTF-8, runs the core operation and folds the
//! outcome into the status code the native caller expects. Nothing raised by
//! the core ever crosses this layer; failures are written to the message log
//! (best-effort) and reported through the status alone.
//!
//! | Operation                  | Success       | Failure                                   |
//! |----------------------------|---------------|-------------------------------------------|
//! | `log_message`              | `true`        | `false`                                   |
//! | `clean_file`               | `true`        | `false`                                   |
//! | `append_line`              | `true`        | `false`                                   |
//! | `read_line`                | `0` + text    | `-1` negative, `-2` none, `-3` range, `-4` |
//! | `file_lines_count`         | count         | `-1` not found, `-2` I/O                  |
//! | `file_maximum_line_length` | max + 1       | `-1` no lines/not found, `-2` I/O         |
//! | `read_all_text`            | `true` + text | `false`                                   |
//! | `replace_string`           | `0`           | `1` search term still present              |

use std::path::Path;
use std::sync::OnceLock;

use crate::config::ShimConfig;
use crate::error::FileTextError;
use crate::message_log::{DatedFileLog, LogSink};
use crate::utility::FileTextUtility;

/// Status plus an optional UTF-16 string in place of a native out-buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<S> {
    pub status: S,
    pub text: Option<Vec<u16>>,
}

impl<S> Reply<S> {
    fn with_text(status: S, text: &str) -> Self {
        Self {
            status,
            text: Some(to_wide(text)),
        }
    }

    fn bare(status: S) -> Self {
        Self { status, text: None }
    }
}

/// Decode a UTF-16 argument, stopping at the first NUL if there is one
pub fn from_wide(wide: &[u16]) -> Result<String, FileTextError> {
    let end = wide.iter().position(|&unit| unit == 0).unwrap_or(wide.len());
    String::from_utf16(&wide[..end]).map_err(|e| FileTextError::Encoding(e.to_string()))
}

/// Encode a string as UTF-16 (no terminator)
pub fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

fn lossy(wide: &[u16]) -> String {
    let end = wide.iter().position(|&unit| unit == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..end])
}

fn clamp_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn read_line_status(error: &FileTextError) -> i32 {
    match error {
        FileTextError::InvalidArgument(_) => -1,
        FileTextError::NotFound | FileTextError::NoLines => -2,
        FileTextError::OutOfRange { .. } => -3,
        _ => -4,
    }
}

fn count_status(error: &FileTextError) -> i32 {
    if error.is_not_found() {
        -1
    } else {
        -2
    }
}

/// Exported operations over a [`FileTextUtility`]
#[derive(Debug, Clone, Default)]
pub struct NativeBoundary<L> {
    utility: FileTextUtility<L>,
}

impl NativeBoundary<DatedFileLog> {
    /// Process-wide instance, built on first use
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<NativeBoundary<DatedFileLog>> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            crate::tracing::init();
            let config = ShimConfig::load();
            NativeBoundary::new(FileTextUtility::new(DatedFileLog::from_config(&config)))
        })
    }
}

impl<L: LogSink> NativeBoundary<L> {
    pub fn new(utility: FileTextUtility<L>) -> Self {
        Self { utility }
    }

    pub fn utility(&self) -> &FileTextUtility<L> {
        &self.utility
    }

    fn report(&self, action: impl FnOnce() -> String, error: &FileTextError) {
        if !error.is_guard() {
            self.utility.report_failure(&action(), error);
        }
    }

    fn on_path<T>(
        &self,
        path: &[u16],
        op: impl FnOnce(&Path) -> Result<T, FileTextError>,
    ) -> Result<T, FileTextError> {
        let path = from_wide(path)?;
        op(Path::new(&path))
    }

    pub fn log_message(&self, message: &[u16]) -> bool {
        match from_wide(message).and_then(|m| self.utility.log_message(&m)) {
            Ok(()) => true,
            Err(e) => {
                self.report(|| format!("Message {}", lossy(message)), &e);
                false
            }
        }
    }

    pub fn clean_file(&self, path: &[u16]) -> bool {
        match self.on_path(path, |p| self.utility.delete_file(p)) {
            Ok(()) => true,
            Err(e) => {
                self.report(|| format!("Deleting file at path {}", lossy(path)), &e);
                false
            }
        }
    }

    pub fn append_line(&self, path: &[u16], line: &[u16]) -> bool {
        let result = from_wide(line).and_then(|line| {
            self.on_path(path, |p| self.utility.append_line(p, &line))
        });
        match result {
            Ok(()) => true,
            Err(e) => {
                self.report(
                    || format!("Appending line {} at path {}", lossy(line), lossy(path)),
                    &e,
                );
                false
            }
        }
    }

    /// Read one line; a negative `line_number` returns `-1` without touching
    /// the filesystem
    pub fn read_line(&self, path: &[u16], line_number: i32) -> Reply<i32> {
        let result = usize::try_from(line_number)
            .map_err(|_| FileTextError::InvalidArgument(format!("line {}", line_number)))
            .and_then(|index| self.on_path(path, |p| self.utility.read_line(p, index)));
        match result {
            Ok(line) => Reply::with_text(0, &line),
            Err(e) => {
                self.report(
                    || format!("Reading line {} at path {}", line_number, lossy(path)),
                    &e,
                );
                Reply::bare(read_line_status(&e))
            }
        }
    }

    pub fn file_lines_count(&self, path: &[u16]) -> i32 {
        match self.on_path(path, |p| self.utility.line_count(p)) {
            Ok(count) => clamp_i32(count),
            Err(e) => {
                self.report(|| format!("Reading line count at path {}", lossy(path)), &e);
                count_status(&e)
            }
        }
    }

    /// Longest line length plus one, kept for compatibility with existing
    /// callers that size buffers from it
    pub fn file_maximum_line_length(&self, path: &[u16]) -> i32 {
        match self.on_path(path, |p| self.utility.longest_line_len(p)) {
            Ok(Some(len)) => clamp_i32(len.saturating_add(1)),
            Ok(None) => -1,
            Err(e) => {
                self.report(
                    || format!("Reading maximum line length at path {}", lossy(path)),
                    &e,
                );
                count_status(&e)
            }
        }
    }

    pub fn read_all_text(&self, path: &[u16]) -> Reply<bool> {
        match self.on_path(path, |p| self.utility.read_all_text(p)) {
            Ok(text) => Reply::with_text(true, &text),
            Err(e) => {
                self.report(|| format!("Reading text at path {}", lossy(path)), &e);
                Reply::bare(false)
            }
        }
    }

    /// Replace in `text`; the returned text is the new buffer content
    ///
    /// Malformed UTF-16 leaves the buffer untouched (`text: None`) and
    /// returns `1`.
    pub fn replace_string(&self, text: &[u16], search: &[u16], replacement: &[u16]) -> Reply<i32> {
        let decoded = from_wide(text).and_then(|text| {
            Ok((text, from_wide(search)?, from_wide(replacement)?))
        });
        match decoded {
            Ok((text, search, replacement)) => {
                let replaced = self.utility.replace_string(&text, &search, &replacement);
                Reply::with_text(i32::from(replaced.search_remains), &replaced.text)
            }
            Err(e) => {
                self.report(|| format!("Replacing {} in {}", lossy(search), lossy(text)), &e);
                Reply::bare(1)
            }
        }
    }
}
