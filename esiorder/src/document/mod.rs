//! Options-document handling.
//!
//! An options document is the namespace-qualified XML form capturing the
//! user's subsetting selections. This module owns the namespace table, the
//! pre-parse normalization step, and the structural query helpers
//! ([`query`]) the field extractors are built on.
//!
//! Documents are parsed once per compilation run into an owned, immutable
//! `roxmltree::Document`; extractors borrow the document and return owned
//! strings, so no node references outlive the run.

use std::sync::OnceLock;

use regex::Regex;

pub mod query;

/// Default namespace of the selection form itself.
pub const FORMS_NS: &str = "http://echo.nasa.gov/v9/echoforms";

/// Namespace of the service-option elements (`ecs` prefix in documents).
pub const OPTIONS_NS: &str = "http://ecs.nasa.gov/options";

/// Namespace of the order-info elements.
pub const INFO_NS: &str = "http://eosdis.nasa.gov/esi/info";

/// Matches a whitespace run sitting directly between two tags.
fn between_tags_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r">\s+<").unwrap())
}

/// Normalizes raw options-document text before parsing.
///
/// Collapses every whitespace run between a closing `>` and an opening `<`
/// and trims the result. This removes all whitespace-only text nodes from
/// the parsed tree, so verbatim text walks see only meaningful content,
/// and makes leading whitespace before the XML declaration harmless.
pub fn normalize(raw: &str) -> String {
    between_tags_pattern()
        .replace_all(raw, "><")
        .trim()
        .to_string()
}
