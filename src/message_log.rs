//! Dated message log
//!
//! Failures are appended to `<dir>/Messages<ddMMyyyy>.log` as
//! `<HH:MM>: <message>` lines. The file is append-only; nothing here rotates
//! or truncates it. The file name is recomputed on every append so entries
//! roll over to a new file at local midnight.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::config::ShimConfig;

/// Platform line terminator used for appended lines and log entries
#[cfg(target_os = "windows")]
pub const NEWLINE: &str = "\r\n";
#[cfg(not(target_os = "windows"))]
pub const NEWLINE: &str = "\n";

/// Destination for message log entries
pub trait LogSink: Send + Sync {
    /// Append one entry
    fn append(&self, message: &str) -> Result<()>;
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn append(&self, message: &str) -> Result<()> {
        (**self).append(message)
    }
}

/// Message log that writes one file per calendar day
#[derive(Debug, Clone)]
pub struct DatedFileLog {
    dir: Option<PathBuf>,
    prefix: String,
    time_format: String,
}

impl Default for DatedFileLog {
    fn default() -> Self {
        Self::from_config(&ShimConfig::default())
    }
}

impl DatedFileLog {
    pub fn from_config(config: &ShimConfig) -> Self {
        let time_format = if is_valid_time_format(&config.time_format) {
            config.time_format.clone()
        } else {
            tracing::warn!(
                "Invalid time format {:?}, using default",
                config.time_format
            );
            crate::config::default_time_format()
        };
        Self {
            dir: config.log_dir.clone(),
            prefix: config.log_file_prefix.clone(),
            time_format,
        }
    }

    /// Log into a fixed directory with default naming
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// File name for the given day, e.g. `Messages14102026.log`
    pub fn file_name_for(&self, date: NaiveDate) -> String {
        format!("{}{}.log", self.prefix, date.format("%d%m%Y"))
    }

    /// Full log path for the given moment
    ///
    /// Configured directories are created on demand; the app-data directory
    /// is expected to exist already.
    pub fn path_for<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<PathBuf> {
        let dir = match &self.dir {
            Some(dir) => {
                crate::config_paths::ensure_dir(dir).map_err(anyhow::Error::msg)?;
                dir.clone()
            }
            None => crate::config_paths::app_data_dir()
                .context("No application data directory available")?,
        };
        Ok(dir.join(self.file_name_for(now.date_naive())))
    }

    /// Format a single entry, including its terminator
    pub fn format_entry<Tz: TimeZone>(&self, now: &DateTime<Tz>, message: &str) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("{}: {}{}", now.format(&self.time_format), message, NEWLINE)
    }
}

/// chrono panics while displaying a malformed format, so reject it up front
fn is_valid_time_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

impl LogSink for DatedFileLog {
    fn append(&self, message: &str) -> Result<()> {
        let now = Local::now();
        let path = self.path_for(&now)?;
        let entry = self.format_entry(&now, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open message log {}", path.display()))?;
        file.write_all(entry.as_bytes())
            .with_context(|| format!("Failed to write message log {}", path.display()))?;
        Ok(())
    }
}
