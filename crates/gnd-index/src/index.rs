//! The search index collaborator abstraction.

use gnd_model::AuthorityDocument;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// External search index collaborator.
///
/// Implementations queue submitted documents and index them on their own
/// schedule; submission order is the record-encounter order, but only
/// [`commit`](SearchIndex::commit) establishes a durability barrier.
/// Implementations must be safe for concurrent submission from multiple
/// callers so that independent files can be loaded in parallel against
/// one handle.
pub trait SearchIndex: Send + Sync {
    /// Submits one document. An error marks this document as failed; it
    /// does not invalidate previously submitted documents.
    fn submit(&self, document: &AuthorityDocument) -> Result<()>;

    /// Flushes all pending submissions durably.
    fn commit(&self) -> Result<()>;
}

/// Caller-owned configuration for constructing an index collaborator.
///
/// `queue_size` bounds how many submissions a collaborator may hold
/// before it must flush; [`JsonLinesIndex`](crate::JsonLinesIndex) uses
/// it as its write batch. `endpoint` and `workers` parameterize remote
/// collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Target endpoint of the index service.
    pub endpoint: String,
    /// Depth of the submission queue.
    pub queue_size: usize,
    /// Number of indexing workers.
    pub workers: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8983/solr/authority".to_string(),
            queue_size: 100,
            workers: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_fill_missing_keys() {
        let config: IndexConfig = serde_json::from_str(r#"{"queue_size": 10}"#).unwrap();
        assert_eq!(config.queue_size, 10);
        assert_eq!(config.workers, 100);
        assert!(config.endpoint.contains("solr"));
    }
}
