//! Buffered line reading for authority files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{IngestError, Result};

/// Opens a file and returns a lazy iterator over its lines.
///
/// Opening errors are reported immediately; read errors encountered while
/// iterating are yielded as items so the caller can abort the file at the
/// point of failure. Decoding and line splitting follow [`BufRead::lines`].
///
/// # Errors
///
/// Returns [`IngestError::FileOpen`] if the file cannot be opened.
pub fn read_lines(path: &Path) -> Result<impl Iterator<Item = Result<String>>> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let path = path.to_path_buf();
    let reader = BufReader::new(file);
    Ok(reader.lines().map(move |line| {
        line.map_err(|source| IngestError::LineRead {
            path: path.clone(),
            source,
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_all_lines_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first\nsecond\nthird").unwrap();

        let lines: Vec<String> = read_lines(file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let result = read_lines(Path::new("/no/such/file.xml"));
        assert!(matches!(result, Err(IngestError::FileOpen { .. })));
    }
}
