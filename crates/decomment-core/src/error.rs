//! Error and warning types for strip runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a run before any file is processed.
///
/// Per-file failures never surface here; they become [`StripWarning`]s and
/// the walk continues.
#[derive(Debug, Error)]
pub enum StripError {
    /// Permission denied for the root path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Root path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error on the root path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl StripError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of per-file warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// The file could not be read.
    Read,
    /// The file's contents were not valid UTF-8.
    Decode,
    /// The rewritten content could not be written back.
    Write,
    /// A directory could not be enumerated during the walk.
    Walk,
}

/// Non-fatal failure for a single file or directory.
///
/// Warnings are recorded in the report and logged; they never abort the walk
/// and the file on disk is left as it was before the attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripWarning {
    /// Path where the failure occurred.
    pub path: PathBuf,
    /// Human-readable message from the underlying cause.
    pub message: String,
    /// Kind of failure.
    pub kind: WarningKind,
}

impl StripWarning {
    /// Create a new warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a warning for a failed read, classifying undecodable content.
    pub fn read_failed(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let kind = if error.kind() == std::io::ErrorKind::InvalidData {
            WarningKind::Decode
        } else {
            WarningKind::Read
        };
        Self::new(path, error.to_string(), kind)
    }

    /// Create a warning for a failed write-back.
    pub fn write_failed(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self::new(path, error.to_string(), WarningKind::Write)
    }

    /// Create a warning for a directory the walk could not enumerate.
    pub fn walk_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(path, message, WarningKind::Walk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_error_io_classification() {
        let err = StripError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, StripError::PermissionDenied { .. }));

        let err = StripError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, StripError::NotFound { .. }));
    }

    #[test]
    fn test_read_failed_classifies_decode() {
        let decode = StripWarning::read_failed(
            "/test/bin.rs",
            &std::io::Error::new(std::io::ErrorKind::InvalidData, "not UTF-8"),
        );
        assert_eq!(decode.kind, WarningKind::Decode);

        let read = StripWarning::read_failed(
            "/test/locked.rs",
            &std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(read.kind, WarningKind::Read);
        assert!(read.message.contains("denied"));
    }
}
