//! Ingestion of GND authority files.
//!
//! This crate turns a MARC-XML authority file into a stream of parsed
//! [`Record`](gnd_model::Record)s in three lazy stages:
//!
//! 1. **Lines**: [`read_lines`] reads the file forward, line by line
//! 2. **Blocks**: [`BlockSplitter`] groups lines between record boundary
//!    markers into blocks, discarding everything outside a pair
//! 3. **Records**: [`parse_block`] extracts the control number and the
//!    field/subfield structure of one block
//!
//! Only whole-file failures (unreadable input) surface as errors; field
//! and subfield problems are handled locally with diagnostics.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gnd_ingest::{read_lines, split_blocks, parse_block, BlockBoundaries};
//!
//! let lines = read_lines(Path::new("gnd.xml"))?;
//! for block in split_blocks(lines, BlockBoundaries::default()) {
//!     let record = parse_block(&block?);
//!     println!("{}", record.diagnostic_id());
//! }
//! ```

mod blocks;
mod error;
mod lines;
mod parser;

pub use blocks::{BlockBoundaries, BlockSplitter, split_blocks};
pub use error::{IngestError, Result};
pub use lines::read_lines;
pub use parser::parse_block;
