//! Error types for artifact emission.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing generated artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create an output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a generated file.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target exists and the overwrite policy forbids replacing it.
    #[error("refusing to overwrite existing file {path}")]
    AlreadyExists { path: PathBuf },
}

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, OutputError>;
