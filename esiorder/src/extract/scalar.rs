//! Scalar and switch field extraction.
//!
//! The top-level parameter names form a fixed allow-list; a generic loop in
//! the compiler walks [`TOP_LEVEL_FIELDS`] rather than each field having its
//! own accessor. Switch fields map free-form yes/no spellings onto the
//! single-letter form the fulfillment service expects.

use roxmltree::Document;

use crate::document::{query, OPTIONS_NS};

/// Top-level scalar fields, extracted in this order.
pub const TOP_LEVEL_FIELDS: [&str; 13] = [
    "INTERPOLATION",
    "FORMAT",
    "PROJECTION",
    "CLIENT",
    "START",
    "END",
    "NATIVE_PROJECTION",
    "OUTPUT_GRID",
    "BBOX",
    "SUBAGENT_ID",
    "REQUEST_MODE",
    "META",
    "INCLUDE_META",
];

/// Accepted switch spellings and their canonical single-letter forms.
const SWITCH_TABLE: [(&str, &str); 10] = [
    ("true", "Y"),
    ("True", "Y"),
    ("TRUE", "Y"),
    ("y", "Y"),
    ("Y", "Y"),
    ("false", "N"),
    ("False", "N"),
    ("FALSE", "N"),
    ("n", "N"),
    ("N", "N"),
];

/// Combined trimmed text of every options-namespace element with the given
/// local name. Multiple matches concatenate in document order before the
/// trim; no match yields an empty string.
pub fn field_text(doc: &Document, local_name: &str) -> String {
    let combined: String = query::elements(doc, OPTIONS_NS, local_name)
        .into_iter()
        .map(query::text_content)
        .collect();
    combined.trim().to_string()
}

/// Canonical Y/N form of a switch field's raw text, or `None` when the
/// spelling is not in the fixed table.
pub fn switch_value(raw: &str) -> Option<&'static str> {
    SWITCH_TABLE
        .iter()
        .find(|(spelling, _)| *spelling == raw)
        .map(|(_, canonical)| *canonical)
}
