//! Error types for metadata loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading metadata.
///
/// Any of them aborts the run before generation begins.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Metadata file not found.
    #[error("metadata file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Document is not valid JSON or does not match the metadata schema.
    #[error("failed to parse metadata from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    // === Validation Errors ===
    /// Invalid value in a metadata field.
    #[error("invalid {field} value '{value}' for {record} in {origin}")]
    InvalidValue {
        field: &'static str,
        value: String,
        record: String,
        origin: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
