//! File-backed index writing one JSON document per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gnd_model::AuthorityDocument;
use tracing::debug;

use crate::error::{IndexError, Result};
use crate::index::{IndexConfig, SearchIndex};

struct Buffered {
    writer: BufWriter<File>,
    pending: usize,
}

/// Index implementation that appends serialized documents to a JSON-lines
/// file. Submissions queue up in the write buffer and are flushed every
/// `queue_size` documents; `commit` flushes the remainder and syncs the
/// file, which is the durability barrier for everything submitted before
/// it.
pub struct JsonLinesIndex {
    path: PathBuf,
    flush_every: usize,
    buffered: Mutex<Buffered>,
}

impl JsonLinesIndex {
    /// Creates (or truncates) the target file with the default
    /// [`IndexConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Open`] if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        Self::with_config(path, &IndexConfig::default())
    }

    /// Creates (or truncates) the target file, batching writes per the
    /// configured queue size.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Open`] if the file cannot be created.
    pub fn with_config(path: &Path, config: &IndexConfig) -> Result<Self> {
        let file = File::create(path).map_err(|source| IndexError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            queue_size = config.queue_size,
            "json-lines index opened"
        );
        Ok(Self {
            path: path.to_path_buf(),
            flush_every: config.queue_size.max(1),
            buffered: Mutex::new(Buffered {
                writer: BufWriter::new(file),
                pending: 0,
            }),
        })
    }

    /// Target file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SearchIndex for JsonLinesIndex {
    fn submit(&self, document: &AuthorityDocument) -> Result<()> {
        let id = document.diagnostic_id().to_string();
        let line = serde_json::to_string(document).map_err(|err| IndexError::Submit {
            id: id.clone(),
            message: err.to_string(),
        })?;
        let mut buffered = self.buffered.lock().map_err(|_| IndexError::Submit {
            id: id.clone(),
            message: "writer lock poisoned".to_string(),
        })?;
        writeln!(buffered.writer, "{line}").map_err(|err| IndexError::Submit {
            id: id.clone(),
            message: err.to_string(),
        })?;
        buffered.pending += 1;
        if buffered.pending >= self.flush_every {
            buffered.writer.flush().map_err(|err| IndexError::Submit {
                id,
                message: err.to_string(),
            })?;
            buffered.pending = 0;
        }
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        let mut buffered = self.buffered.lock().map_err(|_| IndexError::Commit {
            message: "writer lock poisoned".to_string(),
        })?;
        buffered.writer.flush().map_err(|err| IndexError::Commit {
            message: err.to_string(),
        })?;
        buffered.pending = 0;
        buffered
            .writer
            .get_ref()
            .sync_all()
            .map_err(|err| IndexError::Commit {
                message: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(id: &str) -> AuthorityDocument {
        AuthorityDocument::new(Some(id.to_string()))
    }

    #[test]
    fn writes_one_json_document_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("documents.jsonl");
        let index = JsonLinesIndex::create(&target).unwrap();

        let mut first = AuthorityDocument::new(Some("1".to_string()));
        first.set_unique("preferred", "Twain, Mark");
        index.submit(&first).unwrap();
        index.submit(&document("2")).unwrap();
        index.commit().unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let round: AuthorityDocument = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(round, first);
    }

    #[test]
    fn queue_size_sets_the_flush_batch() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("documents.jsonl");
        let config = IndexConfig {
            queue_size: 2,
            ..IndexConfig::default()
        };
        let index = JsonLinesIndex::with_config(&target, &config).unwrap();

        index.submit(&document("1")).unwrap();
        index.submit(&document("2")).unwrap();
        // The full batch was flushed without a commit.
        let content = std::fs::read_to_string(&target).unwrap();
        assert_eq!(content.lines().count(), 2);

        index.submit(&document("3")).unwrap();
        // A partial batch stays queued until the commit.
        let content = std::fs::read_to_string(&target).unwrap();
        assert_eq!(content.lines().count(), 2);

        index.commit().unwrap();
        let content = std::fs::read_to_string(&target).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn unwritable_target_is_an_open_error() {
        let result = JsonLinesIndex::create(Path::new("/no/such/dir/documents.jsonl"));
        assert!(matches!(result, Err(IndexError::Open { .. })));
    }
}
