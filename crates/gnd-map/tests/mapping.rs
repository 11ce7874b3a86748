//! Mapping behavior across whole records.

use gnd_map::{KEY_PREFERRED, KEY_RELATED, KEY_SYNONYMS, default_registry, map_record};
use gnd_model::{DataField, Record};

fn field(tag: &str, subfields: &[(char, &str)]) -> DataField {
    let mut field = DataField::new(tag);
    for (code, value) in subfields {
        field.push_subfield(*code, *value);
    }
    field
}

fn person_record(fields: Vec<DataField>) -> Record {
    Record::new(Some("118540238".to_string()), fields)
}

#[test]
fn preferred_name_formats_numeration_and_titles() {
    let record = person_record(vec![field(
        "100",
        &[('a', "Smith"), ('b', "Jr."), ('c', "Doctor"), ('c', "Professor")],
    )]);

    let document = map_record(&record, default_registry());
    assert_eq!(
        document.unique(KEY_PREFERRED),
        Some("Smith Jr. <Doctor> <Professor>")
    );
}

#[test]
fn heading_without_name_sets_no_preferred_attribute() {
    let record = person_record(vec![field("100", &[('b', "Jr.")])]);

    let document = map_record(&record, default_registry());
    assert!(document.unique(KEY_PREFERRED).is_none());
}

#[test]
fn second_heading_overwrites_the_first() {
    let record = person_record(vec![
        field("100", &[('a', "First, Name")]),
        field("100", &[('a', "Second, Name")]),
    ]);

    let document = map_record(&record, default_registry());
    assert_eq!(document.unique(KEY_PREFERRED), Some("Second, Name"));
}

#[test]
fn pseudonym_relator_maps_to_synonyms_only() {
    let record = person_record(vec![field("400", &[('a', "Twain, Mark"), ('4', "pseu")])]);

    let document = map_record(&record, default_registry());
    assert_eq!(document.multi(KEY_SYNONYMS), &["Twain, Mark".to_string()]);
    assert!(document.relations(KEY_RELATED).is_empty());
}

#[test]
fn unknown_relator_maps_to_related_never_synonyms() {
    let record = person_record(vec![field("400", &[('a', "Clemens, Olivia"), ('4', "abc")])]);

    let document = map_record(&record, default_registry());
    assert!(document.multi(KEY_SYNONYMS).is_empty());
    assert_eq!(
        document.relations(KEY_RELATED),
        &["Clemens, Olivia".to_string()]
    );
}

#[test]
fn mixed_relators_on_one_field_reach_both_sets() {
    let record = person_record(vec![field(
        "400",
        &[('a', "Doe, Jane"), ('4', "nawi"), ('4', "xyz")],
    )]);

    let document = map_record(&record, default_registry());
    assert_eq!(document.multi(KEY_SYNONYMS), &["Doe, Jane".to_string()]);
    assert_eq!(document.relations(KEY_RELATED), &["Doe, Jane".to_string()]);
}

#[test]
fn linking_entry_is_truncated_and_stored_as_relation() {
    let record = person_record(vec![field("700", &[('a', "ABC%DE3...")])]);

    let document = map_record(&record, default_registry());
    assert_eq!(document.relations(KEY_RELATED), &["ABC".to_string()]);
}

#[test]
fn duplicate_synonyms_collapse() {
    let record = person_record(vec![
        field("400", &[('a', "Gete")]),
        field("500", &[('a', "Gete")]),
    ]);

    let document = map_record(&record, default_registry());
    assert_eq!(document.multi(KEY_SYNONYMS), &["Gete".to_string()]);
}

#[test]
fn malformed_field_does_not_abort_siblings() {
    let record = person_record(vec![
        field("400", &[('4', "pseu")]), // no $a
        field("100", &[('a', "Kept, Name")]),
    ]);

    let document = map_record(&record, default_registry());
    assert!(document.multi(KEY_SYNONYMS).is_empty());
    assert_eq!(document.unique(KEY_PREFERRED), Some("Kept, Name"));
}
