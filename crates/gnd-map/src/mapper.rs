//! Record-to-document mapping dispatch.

use gnd_model::{AuthorityDocument, Record};
use tracing::trace;

use crate::registry::HandlerRegistry;

/// Maps one record to its index document.
///
/// Fields are dispatched in source order; every field whose tag has a
/// registered handler contributes, all others are ignored. Contributions
/// are applied through the document's attribute stores, which enforce the
/// unique/multi/relation write semantics.
#[must_use]
pub fn map_record(record: &Record, registry: &HandlerRegistry) -> AuthorityDocument {
    let mut document = AuthorityDocument::new(record.id.clone());
    for field in &record.fields {
        let Some(handler) = registry.get(&field.tag) else {
            continue;
        };
        trace!(
            record = %record.diagnostic_id(),
            tag = %field.tag,
            handler = handler.description(),
            "dispatching field"
        );
        for contribution in handler.handle(field, record) {
            document.apply(contribution);
        }
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_registry;
    use gnd_model::DataField;

    fn field(tag: &str, subfields: &[(char, &str)]) -> DataField {
        let mut field = DataField::new(tag);
        for (code, value) in subfields {
            field.push_subfield(*code, *value);
        }
        field
    }

    #[test]
    fn maps_heading_tracing_and_linking() {
        let record = Record::new(
            Some("118540238".to_string()),
            vec![
                field("100", &[('a', "Goethe, Johann Wolfgang von")]),
                field("400", &[('a', "Gete")]),
                field("700", &[('a', "Goethe%DE-588")]),
                field("999", &[('x', "ignored")]),
            ],
        );

        let document = map_record(&record, default_registry());
        assert_eq!(document.id.as_deref(), Some("118540238"));
        assert_eq!(
            document.unique("preferred"),
            Some("Goethe, Johann Wolfgang von")
        );
        assert_eq!(document.multi("synonyms"), &["Gete".to_string()]);
        assert_eq!(document.relations("related"), &["Goethe".to_string()]);
    }

    #[test]
    fn record_without_handled_fields_yields_empty_document() {
        let record = Record::new(None, vec![field("999", &[('x', "local")])]);
        let document = map_record(&record, default_registry());
        assert!(document.is_empty());
    }
}
