//! Parsed representation of one MARC 21 authority record.

use std::collections::BTreeMap;

/// Placeholder used in diagnostics when a record carries no control number.
pub const UNKNOWN_RECORD_ID: &str = "<unknown>";

/// One tagged field instance inside an authority record.
///
/// A field carries a three-character tag (e.g. `100` for the personal name
/// heading) and a mapping from single-character subfield code to the ordered
/// values seen for that code. A code may repeat within one field, so each
/// code maps to a sequence rather than a single value.
///
/// The subfield map is filled by the parser and read-only afterwards; field
/// handlers never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataField {
    /// Field tag classifying the semantic role (e.g. `100`, `400`, `700`).
    pub tag: String,
    /// Owning record's control number, for diagnostics only.
    pub record_id: String,
    subfields: BTreeMap<char, Vec<String>>,
}

impl DataField {
    /// Creates an empty field for the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            record_id: UNKNOWN_RECORD_ID.to_string(),
            subfields: BTreeMap::new(),
        }
    }

    /// Appends a value for a subfield code, preserving arrival order.
    pub fn push_subfield(&mut self, code: char, value: impl Into<String>) {
        self.subfields.entry(code).or_default().push(value.into());
    }

    /// Returns the first value recorded for a subfield code.
    #[must_use]
    pub fn first(&self, code: char) -> Option<&str> {
        self.subfields
            .get(&code)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns all values recorded for a subfield code, in source order.
    #[must_use]
    pub fn values(&self, code: char) -> Option<&[String]> {
        self.subfields.get(&code).map(Vec::as_slice)
    }

    /// Returns true if no subfield carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subfields.is_empty()
    }
}

/// One parsed authority record: the control number and its fields in
/// source order.
///
/// A record is constructed entirely by the parser from one block of lines,
/// is immutable afterwards, and is discarded once its document has been
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Control number from control field `001`; absent for malformed input.
    pub id: Option<String>,
    /// Fields as they appeared in the source block.
    pub fields: Vec<DataField>,
}

impl Record {
    /// Creates a record from its parts.
    pub fn new(id: Option<String>, fields: Vec<DataField>) -> Self {
        Self { id, fields }
    }

    /// Identifier to use in log messages, falling back to a placeholder.
    #[must_use]
    pub fn diagnostic_id(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_RECORD_ID)
    }
}
