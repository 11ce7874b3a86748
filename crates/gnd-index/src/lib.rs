//! Search index boundary for the GND authority loader.
//!
//! The pipeline talks to the index through the [`SearchIndex`] trait:
//! submit one document, commit durably at end of file. Two
//! implementations ship here: [`JsonLinesIndex`] appends serialized
//! documents to a file, [`MemoryIndex`] keeps them in memory for tests
//! and dry runs. [`DocumentSink`] wraps an index with the per-file
//! accounting and commit policy the pipeline relies on.

mod error;
mod index;
mod jsonl;
mod memory;
mod sink;

pub use error::{IndexError, Result};
pub use index::{IndexConfig, SearchIndex};
pub use jsonl::JsonLinesIndex;
pub use memory::MemoryIndex;
pub use sink::{DocumentSink, SinkReport};
