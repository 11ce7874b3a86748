//! Formatted name building shared by the person field handlers.

use gnd_model::DataField;
use tracing::info;

/// Builds the display form of a name field: `$a`, optionally followed by
/// a space and `$b` (numeration), then one ` <$c>` per repeated `$c`
/// subfield in repetition order.
///
/// `$a` is mandatory: without it the field contributes nothing and one
/// diagnostic is logged. Building never fails the record.
#[must_use]
pub fn build_formatted_name(field: &DataField) -> Option<String> {
    let Some(name) = field.first('a') else {
        info!(
            record = %field.record_id,
            tag = %field.tag,
            "no $a in field, no value contributed"
        );
        return None;
    };
    let mut full_name = String::from(name);
    if let Some(numeration) = field.first('b') {
        full_name.push(' ');
        full_name.push_str(numeration);
    }
    if let Some(titles) = field.values('c') {
        for title in titles {
            full_name.push_str(" <");
            full_name.push_str(title);
            full_name.push('>');
        }
    }
    Some(full_name)
}

/// Truncates a value at the first occurrence of `marker`, removing the
/// marker and everything after it. `"ABC%DE3..."` with marker `"%DE"`
/// becomes `"ABC"`.
#[must_use]
pub fn truncate_at_marker<'a>(value: &'a str, marker: &str) -> &'a str {
    match value.find(marker) {
        Some(position) => &value[..position],
        None => value,
    }
}
