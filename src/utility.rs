//! Line-oriented and whole-file text operations
//!
//! Every operation opens, uses and closes the file itself; nothing is cached
//! between calls. Errors are returned, never logged here: the caller decides
//! whether a failure is worth a message log entry (see [`FileTextUtility::report_failure`]).

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::FileTextError;
use crate::lines;
use crate::message_log::{LogSink, NEWLINE};

/// Outcome of [`FileTextUtility::replace_string`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    /// Text with every occurrence replaced
    pub text: String,
    /// The search term still occurs in `text` after replacement
    pub search_remains: bool,
}

/// File text operations bound to a message log
#[derive(Debug, Clone, Default)]
pub struct FileTextUtility<L> {
    log: L,
}

impl<L: LogSink> FileTextUtility<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Append a message to the log
    pub fn log_message(&self, message: &str) -> Result<(), FileTextError> {
        self.log
            .append(message)
            .map_err(|e| FileTextError::Io(format!("{:#}", e)))
    }

    /// Best-effort log of a failed action
    ///
    /// A failure to write the log entry is discarded and never reaches the
    /// caller.
    pub fn report_failure(&self, action: &str, error: &dyn std::fmt::Display) {
        tracing::warn!("{} failed: {}", action, error);
        let entry = format!("{} failed because of: {}{}", action, NEWLINE, error);
        if let Err(e) = self.log.append(&entry) {
            tracing::debug!("Discarding message log failure: {:#}", e);
        }
    }

    /// Delete the file at `path`
    pub fn delete_file(&self, path: &Path) -> Result<(), FileTextError> {
        fs::remove_file(path)?;
        tracing::debug!("Deleted {}", path.display());
        Ok(())
    }

    /// Append `line` and a platform newline, creating the file if needed
    pub fn append_line(&self, path: &Path, line: &str) -> Result<(), FileTextError> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut buf = String::with_capacity(line.len() + NEWLINE.len());
        buf.push_str(line);
        buf.push_str(NEWLINE);
        file.write_all(buf.as_bytes())?;
        tracing::debug!("Appended {} bytes to {}", buf.len(), path.display());
        Ok(())
    }

    /// Read line `index` (0-based)
    pub fn read_line(&self, path: &Path, index: usize) -> Result<String, FileTextError> {
        let text = self.read_all_text(path)?;
        let lines = lines::split_lines(&text);
        if lines.is_empty() {
            return Err(FileTextError::NoLines);
        }
        lines
            .get(index)
            .map(|line| line.to_string())
            .ok_or(FileTextError::OutOfRange {
                index,
                count: lines.len(),
            })
    }

    /// Number of lines in the file
    pub fn line_count(&self, path: &Path) -> Result<usize, FileTextError> {
        let text = self.read_all_text(path)?;
        Ok(lines::split_lines(&text).len())
    }

    /// Length of the longest line in UTF-16 code units, `None` if no lines
    pub fn longest_line_len(&self, path: &Path) -> Result<Option<usize>, FileTextError> {
        let text = self.read_all_text(path)?;
        Ok(lines::longest(&lines::split_lines(&text)))
    }

    /// Whole file content, without a leading byte-order mark
    pub fn read_all_text(&self, path: &Path) -> Result<String, FileTextError> {
        let bytes = fs::read(path)?;
        let mut text =
            String::from_utf8(bytes).map_err(|e| FileTextError::Decode(e.to_string()))?;
        if text.starts_with('\u{feff}') {
            text = lines::strip_bom(&text).to_string();
        }
        Ok(text)
    }

    /// Replace every occurrence of `search` with `replacement`
    ///
    /// An empty `search` leaves the text untouched and counts as still present,
    /// since every string contains the empty string.
    pub fn replace_string(&self, text: &str, search: &str, replacement: &str) -> Replaced {
        if search.is_empty() {
            return Replaced {
                text: text.to_string(),
                search_remains: true,
            };
        }
        let text = text.replace(search, replacement);
        let search_remains = text.contains(search);
        Replaced {
            text,
            search_remains,
        }
    }
}
