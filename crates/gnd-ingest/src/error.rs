//! Error types for authority file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and splitting an authority file.
///
/// Both variants are fatal for the file being processed: field-level and
/// subfield-level problems are handled locally by the parser and never
/// surface here.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file could not be opened.
    #[error("failed to open input file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read from an already-open file.
    #[error("failed to read from {path}: {source}")]
    LineRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
