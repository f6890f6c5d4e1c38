//! Name/value pair extraction for projection parameters and resample
//! dimensions.

use roxmltree::Document;

use crate::document::{query, OPTIONS_NS};

/// Flattens the projection-parameter tree into one comma-joined token list.
///
/// Each `PROJECTION_PARAMETERS` field holds projection groups whose child
/// elements are the named parameters; every parameter with non-blank text
/// renders as `name:text`. Token order follows document order across all
/// groups.
pub fn projection_parameters(doc: &Document) -> String {
    let mut tokens = Vec::new();
    for field in query::elements(doc, OPTIONS_NS, "PROJECTION_PARAMETERS") {
        for group in query::element_children(field) {
            for parameter in query::element_children(group) {
                let text = query::text_content(parameter);
                if text.trim().is_empty() {
                    continue;
                }
                let token = format!("{}:{}", parameter.tag_name().name(), text);
                tokens.push(chomp(&token));
            }
        }
    }
    tokens.join(",")
}

/// Builds the `dimension:value` resample pair from the field's children.
///
/// The value half comes from the first child whose name contains "value",
/// the dimension half from the first whose name contains "dimension". No
/// value-named child means no pair; a missing dimension child renders the
/// left half empty.
pub fn resample(doc: &Document) -> String {
    let mut fields: Vec<(String, String)> = Vec::new();
    for element in query::elements(doc, OPTIONS_NS, "RESAMPLE") {
        for child in query::element_children(element) {
            let name = child.tag_name().name();
            let text = query::trimmed_text(child);
            match fields.iter_mut().find(|(n, _)| n == name) {
                Some(entry) => entry.1 = text,
                None => fields.push((name.to_string(), text)),
            }
        }
    }

    let Some((_, value_text)) = fields.iter().find(|(n, _)| n.contains("value")) else {
        return String::new();
    };
    let dimension_text = fields
        .iter()
        .find(|(n, _)| n.contains("dimension"))
        .map(|(_, t)| t.as_str())
        .unwrap_or("");

    format!("{}:{}", dimension_text, value_text)
}

/// Removes one trailing line break, mirroring how trailing newlines inside
/// parameter text are dropped without touching interior whitespace.
fn chomp(s: &str) -> String {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .or_else(|| s.strip_suffix('\r'))
        .unwrap_or(s)
        .to_string()
}
