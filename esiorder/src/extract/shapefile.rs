//! Shapefile flag extraction.

use roxmltree::Document;

use crate::document::{query, OPTIONS_NS};

/// True when any `spatial_subset_shapefile_flag` element's text is exactly
/// `"true"`. The comparison is case-sensitive and untrimmed; only this
/// literal spelling opts the order into shapefile-based spatial subsetting.
pub fn shapefile_requested(doc: &Document) -> bool {
    query::elements(doc, OPTIONS_NS, "spatial_subset_shapefile_flag")
        .into_iter()
        .any(|flag| query::text_content(flag) == "true")
}
