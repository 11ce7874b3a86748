//! In-memory index: test double and dry-run sink.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use gnd_model::AuthorityDocument;

use crate::error::{IndexError, Result};
use crate::index::SearchIndex;

/// Index that keeps submitted documents in memory.
///
/// Supports injected failures for exercising the sink's error paths:
/// submissions for selected ids can be rejected, and the next commit can
/// be made to fail.
#[derive(Default)]
pub struct MemoryIndex {
    documents: Mutex<Vec<AuthorityDocument>>,
    rejected_ids: Mutex<BTreeSet<String>>,
    commits: AtomicUsize,
    fail_next_commit: AtomicBool,
}

impl MemoryIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects future submissions of documents with this id.
    ///
    /// The rejection set holds plain data with no invariant a panic could
    /// break, so a poisoned lock is recovered rather than dropping the
    /// configured rejection.
    pub fn reject_submissions_for(&self, id: impl Into<String>) {
        self.rejected_ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into());
    }

    /// Makes the next commit fail.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    /// Snapshot of all submitted documents.
    #[must_use]
    pub fn documents(&self) -> Vec<AuthorityDocument> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of commits issued so far.
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

impl SearchIndex for MemoryIndex {
    fn submit(&self, document: &AuthorityDocument) -> Result<()> {
        let id = document.diagnostic_id().to_string();
        let rejected = self
            .rejected_ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&id);
        if rejected {
            return Err(IndexError::Submit {
                id,
                message: "rejected by test configuration".to_string(),
            });
        }
        self.documents
            .lock()
            .map_err(|_| IndexError::Submit {
                id,
                message: "document store lock poisoned".to_string(),
            })?
            .push(document.clone());
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(IndexError::Commit {
                message: "commit failure injected".to_string(),
            });
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
