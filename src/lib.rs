//! filetext - fail-soft text file utilities for native callers
//!
//! This crate provides line-oriented and whole-file operations (delete,
//! append, read a line, count lines, longest line, read all, replace) where
//! every failure is logged to a dated message log and reported as a status
//! code instead of an error.
//!
//! [`FileTextUtility`] holds the `Result`-returning operations;
//! [`NativeBoundary`] wraps it with UTF-16 arguments and sentinel statuses.

pub mod boundary;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod lines;
pub mod message_log;
pub mod tracing;
pub mod utility;

// Re-export commonly used types
pub use boundary::{NativeBoundary, Reply};
pub use config::ShimConfig;
pub use error::FileTextError;
pub use message_log::{DatedFileLog, LogSink};
pub use utility::{FileTextUtility, Replaced};
