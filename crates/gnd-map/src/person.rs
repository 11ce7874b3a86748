//! Handlers for person authority fields.
//!
//! Tag semantics follow the MARC 21 authority format with the GND
//! extensions: `100` personal name heading, `400`/`500` name tracings
//! (alternative names, pseudonyms, related persons), `700` linking
//! entries to other systems.

use gnd_model::{Contribution, DataField, Record};
use tracing::trace;

use crate::name::{build_formatted_name, truncate_at_marker};

/// Output key of the unique preferred heading.
pub const KEY_PREFERRED: &str = "preferred";
/// Output key of the multi-valued synonym set.
pub const KEY_SYNONYMS: &str = "synonyms";
/// Output key of the relation set.
pub const KEY_RELATED: &str = "related";

/// Relator codes that keep a tracing in the synonym set: pseudonyms and
/// alternate spellings. Every other relator value marks a related entity.
const SYNONYM_RELATORS: [&str; 2] = ["nawi", "pseu"];

/// Suffix marker stripped from linking entry values; `"ABC%DE3..."`
/// becomes `"ABC"`.
const LINKING_SUFFIX_MARKER: &str = "%DE";

/// Personal name heading, `datafield tag="100"`.
///
/// Stores the formatted name (`$a $b <$c>`) as the unique `preferred`
/// attribute.
pub fn heading_personal_name(field: &DataField, _record: &Record) -> Vec<Contribution> {
    trace!(record = %field.record_id, tag = %field.tag, "in handler");
    build_formatted_name(field)
        .map(|name| Contribution::unique(KEY_PREFERRED, name))
        .into_iter()
        .collect()
}

/// Name tracings, `datafield tag="[45]00"`.
///
/// Without a relator subfield `$4` the formatted name is a synonym. With
/// relators the destination is decided per relator value: pseudonym and
/// alternate-spelling relators keep the name in `synonyms`, every other
/// value turns it into a `related` entry. A field carrying relators of
/// both kinds contributes to both sets.
pub fn tracing_personal_name(field: &DataField, _record: &Record) -> Vec<Contribution> {
    trace!(record = %field.record_id, tag = %field.tag, "in handler");
    let Some(name) = build_formatted_name(field) else {
        return Vec::new();
    };
    let Some(relators) = field.values('4') else {
        return vec![Contribution::multi(KEY_SYNONYMS, name)];
    };
    relators
        .iter()
        .map(|relator| {
            if SYNONYM_RELATORS.contains(&relator.as_str()) {
                Contribution::multi(KEY_SYNONYMS, name.clone())
            } else {
                Contribution::relation(KEY_RELATED, name.clone())
            }
        })
        .collect()
}

/// Linking entry to another system, `datafield tag="700"`.
///
/// Builds the formatted name, strips an optional internal-system suffix
/// starting at `%DE`, and stores the result as a `related` entry.
pub fn linking_entry_personal_name(field: &DataField, _record: &Record) -> Vec<Contribution> {
    trace!(record = %field.record_id, tag = %field.tag, "in handler");
    build_formatted_name(field)
        .map(|name| {
            Contribution::relation(KEY_RELATED, truncate_at_marker(&name, LINKING_SUFFIX_MARKER))
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::new(Some("1".to_string()), Vec::new())
    }

    fn name_field(tag: &str, name: &str) -> DataField {
        let mut field = DataField::new(tag);
        field.push_subfield('a', name);
        field
    }

    #[test]
    fn heading_contributes_unique_preferred() {
        let field = name_field("100", "Twain, Mark");
        let contributions = heading_personal_name(&field, &record());
        assert_eq!(
            contributions,
            vec![Contribution::unique(KEY_PREFERRED, "Twain, Mark")]
        );
    }

    #[test]
    fn heading_without_name_contributes_nothing() {
        let field = DataField::new("100");
        assert!(heading_personal_name(&field, &record()).is_empty());
    }

    #[test]
    fn tracing_without_relator_is_a_synonym() {
        let field = name_field("400", "Gete");
        let contributions = tracing_personal_name(&field, &record());
        assert_eq!(
            contributions,
            vec![Contribution::multi(KEY_SYNONYMS, "Gete")]
        );
    }

    #[test]
    fn pseudonym_relator_stays_a_synonym() {
        let mut field = name_field("500", "Twain, Mark");
        field.push_subfield('4', "pseu");
        let contributions = tracing_personal_name(&field, &record());
        assert_eq!(
            contributions,
            vec![Contribution::multi(KEY_SYNONYMS, "Twain, Mark")]
        );
    }

    #[test]
    fn other_relator_becomes_a_relation() {
        let mut field = name_field("500", "Clemens, Olivia");
        field.push_subfield('4', "abc");
        let contributions = tracing_personal_name(&field, &record());
        assert_eq!(
            contributions,
            vec![Contribution::relation(KEY_RELATED, "Clemens, Olivia")]
        );
    }

    #[test]
    fn mixed_relators_contribute_to_both_sets() {
        let mut field = name_field("400", "Doe, Jane");
        field.push_subfield('4', "nawi");
        field.push_subfield('4', "xyz");
        let contributions = tracing_personal_name(&field, &record());
        assert_eq!(
            contributions,
            vec![
                Contribution::multi(KEY_SYNONYMS, "Doe, Jane"),
                Contribution::relation(KEY_RELATED, "Doe, Jane"),
            ]
        );
    }

    #[test]
    fn linking_entry_strips_internal_suffix() {
        let field = name_field("700", "ABC%DE3...");
        let contributions = linking_entry_personal_name(&field, &record());
        assert_eq!(
            contributions,
            vec![Contribution::relation(KEY_RELATED, "ABC")]
        );
    }
}
