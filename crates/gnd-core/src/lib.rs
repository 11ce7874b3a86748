//! Per-file orchestration for the GND authority loader.
//!
//! One call to [`load`] runs the whole pipeline for one file: line stream
//! → record blocks → parsed records → mapped documents → index sink, as a
//! single lazy forward pass, finishing with the durability commit.
//! Callers that process several files concurrently can share one index
//! handle; no state is shared between files.

mod pipeline;

pub use pipeline::{LoadReport, load, load_with_boundaries};
