//! Output document and the contribution triples field handlers produce.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::record::UNKNOWN_RECORD_ID;

/// Storage class a mapped value is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeClass {
    /// At most one value per key; a second write replaces the first.
    Unique,
    /// Deduplicated, order-preserving set of values per key.
    Multi,
    /// Cross-reference values, kept apart from the multi-valued store.
    Relation,
}

/// One (class, key, value) triple produced by a field handler.
///
/// Handlers return contributions instead of writing into the document
/// directly, so the classification logic stays independently testable and
/// the assembly step applies all writes uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub class: AttributeClass,
    pub key: String,
    pub value: String,
}

impl Contribution {
    /// Contribution to a unique-valued attribute.
    pub fn unique(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            class: AttributeClass::Unique,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Contribution to a multi-valued attribute.
    pub fn multi(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            class: AttributeClass::Multi,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Contribution to a relation attribute.
    pub fn relation(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            class: AttributeClass::Relation,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The document submitted to the search index for one authority record.
///
/// Values live in three stores with distinct write semantics:
///
/// - unique: one value per key ("preferred"); a second write wins but is
///   logged as a warning, never silently ambiguous
/// - multi: append with per-key deduplication ("synonyms")
/// - relations: same semantics as multi, kept distinct ("related")
///
/// A document is created empty per record, populated by handler dispatch,
/// then handed whole to the sink and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityDocument {
    /// Record control number, when the source record carried one.
    pub id: Option<String>,
    unique: BTreeMap<String, String>,
    multi: BTreeMap<String, Vec<String>>,
    relations: BTreeMap<String, Vec<String>>,
}

impl AuthorityDocument {
    /// Creates an empty document for a record id.
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Identifier to use in log messages, falling back to a placeholder.
    #[must_use]
    pub fn diagnostic_id(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_RECORD_ID)
    }

    /// Routes a contribution to the store matching its class.
    pub fn apply(&mut self, contribution: Contribution) {
        match contribution.class {
            AttributeClass::Unique => self.set_unique(contribution.key, contribution.value),
            AttributeClass::Multi => self.add_multi(contribution.key, contribution.value),
            AttributeClass::Relation => self.add_relation(contribution.key, contribution.value),
        }
    }

    /// Sets a unique-valued attribute. A second write to the same key
    /// replaces the first and logs a warning.
    pub fn set_unique(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(previous) = self.unique.insert(key.clone(), value) {
            warn!(
                record = %self.diagnostic_id(),
                key = %key,
                previous = %previous,
                "unique attribute overwritten"
            );
        }
    }

    /// Appends to a multi-valued attribute, collapsing duplicates while
    /// preserving first-seen order.
    pub fn add_multi(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let values = self.multi.entry(key.into()).or_default();
        let value = value.into();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Appends to a relation attribute with the same deduplication rules
    /// as the multi-valued store.
    pub fn add_relation(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let values = self.relations.entry(key.into()).or_default();
        let value = value.into();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Returns the unique value stored under a key.
    #[must_use]
    pub fn unique(&self, key: &str) -> Option<&str> {
        self.unique.get(key).map(String::as_str)
    }

    /// Returns the multi-valued entries stored under a key.
    #[must_use]
    pub fn multi(&self, key: &str) -> &[String] {
        self.multi.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns the relation entries stored under a key.
    #[must_use]
    pub fn relations(&self, key: &str) -> &[String] {
        self.relations.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns true if no store holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unique.is_empty() && self.multi.is_empty() && self.relations.is_empty()
    }
}
