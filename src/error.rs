//! Error taxonomy shared by every file operation
//!
//! Core operations return `Result<_, FileTextError>`; the native boundary
//! maps each variant onto the per-operation sentinel value.

use std::io;

/// Errors that can occur while operating on a text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTextError {
    /// Argument rejected before any file access (e.g. negative line index)
    InvalidArgument(String),
    /// File does not exist
    NotFound,
    /// File exists but yields no lines
    NoLines,
    /// Requested line index is past the last line
    OutOfRange { index: usize, count: usize },
    /// Permission denied by the filesystem
    PermissionDenied,
    /// File content is not valid UTF-8
    Decode(String),
    /// Caller-supplied UTF-16 string is malformed
    Encoding(String),
    /// Other I/O error
    Io(String),
}

impl FileTextError {
    /// Whether this error is an input check that fired before anything failed
    ///
    /// Guard rejections are reported through the status code alone and are not
    /// written to the message log.
    pub fn is_guard(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::NoLines | Self::OutOfRange { .. }
        )
    }

    /// Whether this error belongs to the not-found / empty-result category
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound | Self::NoLines)
    }
}

impl From<io::Error> for FileTextError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::InvalidData => Self::Decode(e.to_string()),
            _ => Self::Io(e.to_string()),
        }
    }
}

impl std::fmt::Display for FileTextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Self::NotFound => write!(f, "file not found"),
            Self::NoLines => write!(f, "file contains no lines"),
            Self::OutOfRange { index, count } => {
                write!(f, "line {} out of range (file has {} lines)", index, count)
            }
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Decode(msg) => write!(f, "invalid UTF-8 content: {}", msg),
            Self::Encoding(msg) => write!(f, "invalid UTF-16 argument: {}", msg),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FileTextError {}
