//! Error types for the search index boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by index implementations and the document sink.
///
/// Submission errors are local to one document: the sink records them and
/// continues. Commit errors are fatal for the file being loaded, since
/// without a successful commit none of its submissions are durable.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A single document was rejected by the index.
    #[error("failed to submit document {id}: {message}")]
    Submit { id: String, message: String },

    /// The durability commit failed.
    #[error("commit failed: {message}")]
    Commit { message: String },

    /// The index storage could not be opened.
    #[error("failed to open index target {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_error_names_the_document() {
        let err = IndexError::Submit {
            id: "118540238".to_string(),
            message: "rejected".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to submit document 118540238: rejected"
        );
    }
}
