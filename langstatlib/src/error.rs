//! Error types for langstatlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analyzing a source tree.
///
/// Per-file and per-directory failures during a scan are recovered locally
/// and never show up here; these variants are what reaches the caller.
#[derive(Error, Debug)]
pub enum LangstatError {
    /// No root directories were supplied to an analysis
    #[error("no workspace folder is open")]
    NoRoots,

    /// A summary was requested before any language was counted
    #[error("no statistics available, analyze a workspace first")]
    NoStatistics,

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
