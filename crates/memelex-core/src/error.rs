//! Error types for memelex-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while reading or writing a term-collection document.
///
/// Every variant is terminal for the run: the hygiene passes abort before
/// writing anything when the input cannot be loaded, so re-running after
/// fixing the input is always safe.
#[derive(Error, Debug)]
pub enum StoreError {
    /// File missing or unreadable
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not valid JSON, or records missing required fields
    #[error("invalid document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level value is not an array
    #[error("expected a JSON array at the top level of {path}")]
    NotAnArray { path: PathBuf },

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
