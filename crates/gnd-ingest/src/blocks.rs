//! Grouping a line stream into record blocks.
//!
//! A block is the maximal contiguous run of lines from a start-marker line
//! through the next end-marker line, both inclusive. Lines outside any
//! start/end pair (XML preamble, collection wrappers, trailing whitespace)
//! are discarded.
//!
//! The grouping is deliberately lenient, mirroring the tolerance the
//! upstream data requires rather than XML well-formedness:
//!
//! - a start marker seen while a block is open does not open a new block
//! - an end marker with no open block is dropped silently
//! - an unterminated trailing block is dropped

use regex::Regex;

use crate::error::Result;

/// Line predicates delimiting one record block.
#[derive(Debug, Clone)]
pub struct BlockBoundaries {
    /// Matches the line that opens a block.
    pub start: Regex,
    /// Matches the line that closes a block.
    pub end: Regex,
}

impl BlockBoundaries {
    /// Boundaries from caller-supplied patterns.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] if a pattern does not compile.
    pub fn from_patterns(start: &str, end: &str) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            start: Regex::new(start)?,
            end: Regex::new(end)?,
        })
    }
}

impl Default for BlockBoundaries {
    /// MARC-XML record element boundaries.
    fn default() -> Self {
        Self {
            start: Regex::new("<record").expect("static pattern compiles"),
            end: Regex::new("</record").expect("static pattern compiles"),
        }
    }
}

/// Lazy iterator adapter yielding one `Vec<String>` per record block.
///
/// Reads its input in a single forward pass and never materializes more
/// than the block currently being collected. A read error from the
/// underlying line iterator is passed through and ends the stream.
pub struct BlockSplitter<I> {
    lines: I,
    boundaries: BlockBoundaries,
}

impl<I> BlockSplitter<I>
where
    I: Iterator<Item = Result<String>>,
{
    /// Wraps a line iterator with the given boundaries.
    pub fn new(lines: I, boundaries: BlockBoundaries) -> Self {
        Self { lines, boundaries }
    }
}

impl<I> Iterator for BlockSplitter<I>
where
    I: Iterator<Item = Result<String>>,
{
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut block = Vec::new();
        let mut open = false;
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            if !open {
                // Anything before a start marker is preamble; drop it.
                if !self.boundaries.start.is_match(&line) {
                    continue;
                }
                open = true;
            }
            // A nested start marker keeps the current block open; only an
            // end marker closes it.
            let closes = self.boundaries.end.is_match(&line);
            block.push(line);
            if closes {
                return Some(Ok(block));
            }
        }
        // EOF with an open block: unterminated, dropped.
        None
    }
}

/// Convenience constructor for the common call site.
pub fn split_blocks<I>(lines: I, boundaries: BlockBoundaries) -> BlockSplitter<I>
where
    I: Iterator<Item = Result<String>>,
{
    BlockSplitter::new(lines, boundaries)
}
