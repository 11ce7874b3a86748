//! Per-file loading pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use gnd_index::{DocumentSink, SearchIndex};
use gnd_ingest::{BlockBoundaries, parse_block, read_lines, split_blocks};
use gnd_map::{default_registry, map_record};

/// Outcome of loading one authority file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records reconstructed from the file.
    pub records: usize,
    /// Documents accepted by the index.
    pub submitted: usize,
    /// Documents the index rejected.
    pub failed: usize,
}

impl LoadReport {
    /// Returns true if every reconstructed record reached the index.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Loads one authority file into the index with the default rule set.
///
/// # Errors
///
/// Fatal for the file: an unreadable input (open or mid-stream read
/// failure) and a failed end-of-file commit. Everything below that level
/// (malformed subfields, missing mandatory subfields, rejected documents)
/// is handled locally with diagnostics and counters.
pub fn load(path: &Path, index: &dyn SearchIndex) -> Result<LoadReport> {
    load_with_boundaries(path, index, BlockBoundaries::default())
}

/// Loads one file with caller-supplied block boundary predicates.
///
/// One single forward pass: lines are grouped into record blocks, each
/// block is parsed into a record, mapped to a document, and submitted.
/// No stage materializes the whole file. Exactly one commit is issued
/// after the input is exhausted.
pub fn load_with_boundaries(
    path: &Path,
    index: &dyn SearchIndex,
    boundaries: BlockBoundaries,
) -> Result<LoadReport> {
    let span = info_span!("load", file = %path.display());
    let _guard = span.enter();

    let lines =
        read_lines(path).with_context(|| format!("read input file {}", path.display()))?;
    let registry = default_registry();
    let mut sink = DocumentSink::new(index);
    let mut records = 0usize;
    for block in split_blocks(lines, boundaries) {
        let block = block.with_context(|| format!("read input file {}", path.display()))?;
        let record = parse_block(&block);
        let document = map_record(&record, registry);
        records += 1;
        sink.submit(&document);
    }
    let report = sink
        .finish()
        .with_context(|| format!("commit after loading {}", path.display()))?;

    info!(
        records,
        submitted = report.submitted,
        failed = report.failed,
        "file loaded"
    );
    Ok(LoadReport {
        records,
        submitted: report.submitted,
        failed: report.failed,
    })
}
