//! Subset data layer extraction.
//!
//! Selected layers arrive in four different tree shapes depending on how
//! the form was built: whole-subtree selections on immediate children,
//! item selections at any depth, per-band selections below a selected
//! item, and plain text under `style="tree"` fields. The four result sets
//! are unioned in that fixed order with no deduplication; the downstream
//! service tolerates repeats.

use roxmltree::Document;

use crate::document::{query, OPTIONS_NS};

/// Comma-joined union of all selected layer identifiers.
pub fn subset_data_layers(doc: &Document) -> String {
    let fields = query::elements(doc, OPTIONS_NS, "SUBSET_DATA_LAYERS");

    let mut tokens = Vec::new();

    // Immediate children selected as a whole subtree, value attribute only.
    for field in &fields {
        for child in query::element_children(*field) {
            if !query::child_text_equals(child, OPTIONS_NS, "subtreeSelected", "true") {
                continue;
            }
            if let Some(value) = child.attribute("value") {
                tokens.push(value.to_string());
            }
        }
    }

    // Descendants at any depth carrying both selection flags.
    for field in &fields {
        for node in query::element_descendants(*field) {
            if !query::child_text_equals(node, OPTIONS_NS, "itemSelected", "true")
                || !query::child_text_equals(node, OPTIONS_NS, "subtreeSelected", "true")
            {
                continue;
            }
            if let Some(value) = node.attribute("value") {
                tokens.push(value.to_string());
            }
        }
    }

    // Band children of selected items, rendered as value[magnitude].
    for field in &fields {
        for node in query::element_descendants(*field) {
            if !query::child_text_equals(node, OPTIONS_NS, "itemSelected", "true") {
                continue;
            }
            for band in query::element_children(node) {
                if !query::has_positive_numeric_child(band, OPTIONS_NS, "value") {
                    continue;
                }
                let value_attr = band.attribute("value").unwrap_or("");
                let magnitude: String = band
                    .children()
                    .filter(|c| c.has_tag_name((OPTIONS_NS, "value")))
                    .map(query::text_content)
                    .collect();
                tokens.push(format!("{}[{}]", value_attr, magnitude));
            }
        }
    }

    // Tree-styled fields contribute every text node below them verbatim.
    for field in &fields {
        if field.attribute("style") != Some("tree") {
            continue;
        }
        for node in query::element_descendants(*field) {
            for child in node.children() {
                if child.is_text() {
                    if let Some(text) = child.text() {
                        tokens.push(text.to_string());
                    }
                }
            }
        }
    }

    tokens.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> String {
        format!("<root xmlns:ecs=\"{}\">{}</root>", OPTIONS_NS, body)
    }

    const MIXED_SELECTION: &str = concat!(
        "<ecs:SUBSET_DATA_LAYERS>",
        "<ecs:group value=\"/G1\">",
        "<ecs:subtreeSelected>true</ecs:subtreeSelected>",
        "</ecs:group>",
        "<ecs:group value=\"/G2\">",
        "<ecs:subtreeSelected>false</ecs:subtreeSelected>",
        "<ecs:layer value=\"/G2/L1\">",
        "<ecs:itemSelected>true</ecs:itemSelected>",
        "<ecs:subtreeSelected>true</ecs:subtreeSelected>",
        "</ecs:layer>",
        "<ecs:layer value=\"/G2/L2\">",
        "<ecs:itemSelected>true</ecs:itemSelected>",
        "<ecs:band value=\"B1\"><ecs:value>2</ecs:value></ecs:band>",
        "<ecs:band value=\"B2\"><ecs:value>-1</ecs:value></ecs:band>",
        "</ecs:layer>",
        "</ecs:group>",
        "</ecs:SUBSET_DATA_LAYERS>",
    );

    #[test]
    fn test_union_order_is_objects_then_items_then_bands() {
        let xml = parse(MIXED_SELECTION);
        let doc = Document::parse(&xml).unwrap();

        assert_eq!(subset_data_layers(&doc), "/G1,/G2/L1,B1[2]");
    }

    #[test]
    fn test_no_selection_yields_empty() {
        let xml = parse(
            "<ecs:SUBSET_DATA_LAYERS><ecs:group value=\"/G1\"><ecs:subtreeSelected>false</ecs:subtreeSelected></ecs:group></ecs:SUBSET_DATA_LAYERS>",
        );
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(subset_data_layers(&doc), "");
    }

    #[test]
    fn test_selected_node_without_value_attribute_is_skipped() {
        let xml = parse(
            "<ecs:SUBSET_DATA_LAYERS><ecs:group><ecs:subtreeSelected>true</ecs:subtreeSelected></ecs:group></ecs:SUBSET_DATA_LAYERS>",
        );
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(subset_data_layers(&doc), "");
    }

    #[test]
    fn test_flag_text_must_be_exactly_true() {
        let xml = parse(
            "<ecs:SUBSET_DATA_LAYERS><ecs:group value=\"/G1\"><ecs:subtreeSelected>True</ecs:subtreeSelected></ecs:group></ecs:SUBSET_DATA_LAYERS>",
        );
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(subset_data_layers(&doc), "");
    }

    #[test]
    fn test_band_magnitude_uses_inner_value_text() {
        let xml = parse(concat!(
            "<ecs:SUBSET_DATA_LAYERS>",
            "<ecs:layer value=\"/L\">",
            "<ecs:itemSelected>true</ecs:itemSelected>",
            "<ecs:band value=\"B7\"><ecs:value>0.5</ecs:value></ecs:band>",
            "</ecs:layer>",
            "</ecs:SUBSET_DATA_LAYERS>",
        ));
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(subset_data_layers(&doc), "B7[0.5]");
    }

    #[test]
    fn test_band_without_value_attribute_renders_empty_name() {
        let xml = parse(concat!(
            "<ecs:SUBSET_DATA_LAYERS>",
            "<ecs:layer value=\"/L\">",
            "<ecs:itemSelected>true</ecs:itemSelected>",
            "<ecs:band><ecs:value>1</ecs:value></ecs:band>",
            "</ecs:layer>",
            "</ecs:SUBSET_DATA_LAYERS>",
        ));
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(subset_data_layers(&doc), "[1]");
    }

    #[test]
    fn test_tree_style_collects_text_verbatim() {
        let xml = parse(concat!(
            "<ecs:SUBSET_DATA_LAYERS style=\"tree\">",
            "<ecs:d1>Layer One<ecs:d2>Layer Two</ecs:d2></ecs:d1>",
            "</ecs:SUBSET_DATA_LAYERS>",
        ));
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(subset_data_layers(&doc), "Layer One,Layer Two");
    }

    #[test]
    fn test_non_tree_style_ignores_text_nodes() {
        let xml = parse(concat!(
            "<ecs:SUBSET_DATA_LAYERS style=\"flat\">",
            "<ecs:d1>Layer One</ecs:d1>",
            "</ecs:SUBSET_DATA_LAYERS>",
        ));
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(subset_data_layers(&doc), "");
    }

    #[test]
    fn test_repeated_identifiers_are_kept() {
        // An immediate child with both flags matches the subtree query and
        // the item query, so its identifier appears twice.
        let xml = parse(concat!(
            "<ecs:SUBSET_DATA_LAYERS>",
            "<ecs:layer value=\"/L\">",
            "<ecs:itemSelected>true</ecs:itemSelected>",
            "<ecs:subtreeSelected>true</ecs:subtreeSelected>",
            "</ecs:layer>",
            "</ecs:SUBSET_DATA_LAYERS>",
        ));
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(subset_data_layers(&doc), "/L,/L");
    }
}
