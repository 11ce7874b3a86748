//! Document sink: submission accounting and the end-of-file commit.

use gnd_model::AuthorityDocument;
use tracing::error;

use crate::error::Result;
use crate::index::SearchIndex;

/// Counters returned by [`DocumentSink::finish`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkReport {
    /// Documents accepted by the index.
    pub submitted: usize,
    /// Documents the index rejected; the file kept processing.
    pub failed: usize,
}

/// Accepts completed documents for one source file and hands them to the
/// index collaborator.
///
/// A rejected document is counted and logged, never fatal; the commit
/// issued by [`finish`](Self::finish) is the only fatal boundary. The sink
/// holds no per-record state between submissions.
pub struct DocumentSink<'a> {
    index: &'a dyn SearchIndex,
    submitted: usize,
    failed: usize,
}

impl<'a> DocumentSink<'a> {
    /// Creates a sink over an index collaborator.
    pub fn new(index: &'a dyn SearchIndex) -> Self {
        Self {
            index,
            submitted: 0,
            failed: 0,
        }
    }

    /// Submits one document, recording a failure instead of propagating it.
    pub fn submit(&mut self, document: &AuthorityDocument) {
        match self.index.submit(document) {
            Ok(()) => self.submitted += 1,
            Err(err) => {
                error!(record = %document.diagnostic_id(), %err, "document submission failed");
                self.failed += 1;
            }
        }
    }

    /// Issues the durability commit and returns the submission counters.
    ///
    /// # Errors
    ///
    /// Propagates a commit failure; without a successful commit none of the
    /// file's submissions are guaranteed durable.
    pub fn finish(self) -> Result<SinkReport> {
        self.index.commit()?;
        Ok(SinkReport {
            submitted: self.submitted,
            failed: self.failed,
        })
    }
}
