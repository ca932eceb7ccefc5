//! Error types for tree construction.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that fail a directory scan outright.
///
/// Only problems with the course root itself land here. Per-entry failures
/// deeper in the walk become [`ScanWarning`]s and the affected branch is
/// dropped from the tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for the course root.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Course root not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Course root is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl ScanError {
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

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// An entry or directory listing could not be read; its branch was
    /// dropped.
    ReadError,
    /// Size/modified metadata could not be read; the file was dropped.
    MetadataError,
}

/// Non-fatal problem recorded during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a read error warning.
    pub fn read_error(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::new(path, format!("Read error: {message}"), WarningKind::ReadError)
    }

    /// Create a metadata error warning.
    pub fn metadata_error(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::new(
            path,
            format!("Metadata error: {message}"),
            WarningKind::MetadataError,
        )
    }
}

/// Errors raised while reconstructing a tree from a flat file list.
///
/// A malformed list fails as a whole batch; there is no meaningful partial
/// tree to salvage from corrupt input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    /// An entry carried an empty relative path.
    #[error("empty relative path in file list")]
    EmptyPath,

    /// An entry carried an absolute path where a relative one is required.
    #[error("absolute path in file list: {path}")]
    AbsolutePath { path: String },

    /// A relative path contained an empty segment (`a//b`, `a/`).
    #[error("empty segment in relative path: {path}")]
    EmptySegment { path: String },
}
