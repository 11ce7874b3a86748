//! Field/subfield extraction from one record block.
//!
//! This is not a general XML parser: the block vocabulary is fixed
//! (`controlfield`, `datafield`, `subfield`), extraction is a single
//! forward scan over the block text, and anything unrecognized is skipped.
//! Unknown datafield tags are preserved in the record so that handler
//! lookup simply finds nothing for them.
//!
//! Tolerance rules: a subfield with a missing or malformed `code`
//! attribute, or with an empty value, is skipped with a diagnostic; an
//! unclosed datafield is flushed as-is. Nothing in here fails the record
//! or the file.

use std::sync::LazyLock;

use quick_xml::escape::unescape;
use regex::Regex;
use tracing::{debug, info};

use gnd_model::{DataField, Record};

/// Control field carrying the record identifier.
const ID_CONTROL_TAG: &str = "001";

/// Structural tokens of a record block, in source order.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<controlfield[^>]*>.*?</controlfield>|</datafield>|<datafield[^>]*>|<subfield[^>]*>[^<]*</subfield>|<subfield[^>]*/>",
    )
    .expect("static pattern compiles")
});

static TAG_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tag\s*=\s*"([^"]*)""#).expect("static pattern compiles"));

static CODE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"code\s*=\s*"([^"]*)""#).expect("static pattern compiles"));

/// Parses one block of lines into a [`Record`].
///
/// The record id is taken from control field `001`; fields keep their
/// source order; `record_id` is back-filled on every field once the block
/// is fully parsed. Identical input always yields an identical record.
#[must_use]
pub fn parse_block(lines: &[String]) -> Record {
    let text = lines.join("\n");
    let mut id: Option<String> = None;
    let mut fields: Vec<DataField> = Vec::new();
    let mut current: Option<DataField> = None;

    for token in TOKEN_RE.find_iter(&text) {
        let token = token.as_str();
        if let Some(rest) = token.strip_prefix("<controlfield") {
            if attribute(&TAG_ATTR_RE, token).as_deref() == Some(ID_CONTROL_TAG) {
                id = element_text(rest).map(|value| value.trim().to_string());
            }
        } else if token.starts_with("</datafield") {
            if let Some(field) = current.take() {
                fields.push(field);
            }
        } else if token.starts_with("<datafield") {
            if let Some(field) = current.take() {
                // Unclosed previous field; keep what it collected.
                fields.push(field);
            }
            match attribute(&TAG_ATTR_RE, token) {
                Some(tag) => current = Some(DataField::new(tag)),
                None => debug!("datafield without tag attribute skipped"),
            }
        } else if let Some(rest) = token.strip_prefix("<subfield") {
            let Some(field) = current.as_mut() else {
                // Subfield outside any datafield; drop it.
                continue;
            };
            let code = attribute(&CODE_ATTR_RE, token);
            let Some(code) = code.as_deref().and_then(single_char) else {
                info!(tag = %field.tag, "subfield without usable code attribute skipped");
                continue;
            };
            match element_text(rest) {
                Some(value) if !value.is_empty() => field.push_subfield(code, value),
                _ => {
                    info!(tag = %field.tag, code = %code, "empty subfield value skipped");
                }
            }
        }
    }
    if let Some(field) = current.take() {
        fields.push(field);
    }

    if let Some(id) = &id {
        for field in &mut fields {
            field.record_id = id.clone();
        }
    }
    Record::new(id, fields)
}

/// Extracts an attribute value from the opening-tag portion of a token.
fn attribute(pattern: &Regex, token: &str) -> Option<String> {
    let open_tag = token.split('>').next().unwrap_or(token);
    let raw = pattern.captures(open_tag)?.get(1)?.as_str();
    decode(raw)
}

/// Text content between the first `>` and the closing tag, entity-decoded.
fn element_text(after_element_name: &str) -> Option<String> {
    let after_open = after_element_name.split_once('>')?.1;
    let inner = after_open.split('<').next().unwrap_or(after_open);
    decode(inner)
}

/// Subfield codes are single characters; anything else is malformed.
fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Some(code),
        _ => None,
    }
}

fn decode(raw: &str) -> Option<String> {
    match unescape(raw) {
        Ok(value) => Some(value.into_owned()),
        Err(err) => {
            debug!(%err, "undecodable entity reference, value skipped");
            None
        }
    }
}
