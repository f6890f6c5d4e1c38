//! Structural queries over a parsed options document.
//!
//! Thin, namespace-aware helpers on top of `roxmltree`. Zero matches is a
//! normal empty result, never an error; the only failure mode in document
//! handling is the parse itself, which happens before any query runs.

use roxmltree::{Document, Node};

/// All elements in the document with the given namespace and local name,
/// in document order.
pub fn elements<'a, 'input>(
    doc: &'a Document<'input>,
    ns: &str,
    local_name: &str,
) -> Vec<Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.has_tag_name((ns, local_name)))
        .collect()
}

/// All elements whose local name contains `fragment`, regardless of
/// namespace, in document order.
pub fn elements_with_name_containing<'a, 'input>(
    doc: &'a Document<'input>,
    fragment: &str,
) -> Vec<Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name().contains(fragment))
        .collect()
}

/// Concatenated text of every text node at or below `node` (the node's
/// string value). Not trimmed; equality predicates compare this raw form.
pub fn text_content(node: Node) -> String {
    node.descendants()
        .filter_map(|n| if n.is_text() { n.text() } else { None })
        .collect()
}

/// String value of `node`, trimmed of leading and trailing whitespace.
pub fn trimmed_text(node: Node) -> String {
    text_content(node).trim().to_string()
}

/// Element children of `node`, in document order.
pub fn element_children<'a, 'input>(node: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    node.children().filter(|c| c.is_element()).collect()
}

/// Element descendants of `node` at any depth, excluding `node` itself,
/// in document order.
pub fn element_descendants<'a, 'input>(node: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(|d| d.is_element())
        .collect()
}

/// True when `node` has a child element `(ns, local_name)` whose string
/// value equals `literal` exactly.
pub fn child_text_equals(node: Node, ns: &str, local_name: &str, literal: &str) -> bool {
    node.children()
        .any(|c| c.has_tag_name((ns, local_name)) && text_content(c) == literal)
}

/// True when `node` has a child element `(ns, local_name)` whose string
/// value parses as a number greater than zero.
pub fn has_positive_numeric_child(node: Node, ns: &str, local_name: &str) -> bool {
    node.children().any(|c| {
        c.has_tag_name((ns, local_name))
            && text_content(c)
                .trim()
                .parse::<f64>()
                .map(|v| v > 0.0)
                .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::OPTIONS_NS;

    fn sample() -> String {
        format!(
            concat!(
                "<root xmlns:ecs=\"{ns}\">",
                "<ecs:FORMAT>GeoTIFF</ecs:FORMAT>",
                "<other:FORMAT xmlns:other=\"urn:other\">HDF</other:FORMAT>",
                "<ecs:layer value=\"L1\">",
                "<ecs:itemSelected>true</ecs:itemSelected>",
                "<ecs:value>2.5</ecs:value>",
                "<ecs:band value=\"B1\"><ecs:value>0</ecs:value></ecs:band>",
                "</ecs:layer>",
                "<ecs:boundingbox1><ullon>-10</ullon></ecs:boundingbox1>",
                "</root>"
            ),
            ns = OPTIONS_NS
        )
    }

    #[test]
    fn test_elements_filters_by_namespace_and_name() {
        let xml = sample();
        let doc = Document::parse(&xml).unwrap();

        let matches = elements(&doc, OPTIONS_NS, "FORMAT");
        assert_eq!(matches.len(), 1);
        assert_eq!(text_content(matches[0]), "GeoTIFF");
    }

    #[test]
    fn test_elements_empty_when_no_match() {
        let xml = sample();
        let doc = Document::parse(&xml).unwrap();
        assert!(elements(&doc, OPTIONS_NS, "MISSING").is_empty());
    }

    #[test]
    fn test_elements_with_name_containing_ignores_namespace() {
        let xml = sample();
        let doc = Document::parse(&xml).unwrap();

        let matches = elements_with_name_containing(&doc, "boundingbox");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].tag_name().name(), "boundingbox1");
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let xml = format!(
            "<root xmlns:ecs=\"{}\"><ecs:a>one<ecs:b>two</ecs:b>three</ecs:a></root>",
            OPTIONS_NS
        );
        let doc = Document::parse(&xml).unwrap();
        let a = elements(&doc, OPTIONS_NS, "a");
        assert_eq!(text_content(a[0]), "onetwothree");
    }

    #[test]
    fn test_trimmed_text_strips_edges_only() {
        let xml = format!(
            "<root xmlns:ecs=\"{}\"><ecs:a> padded  value </ecs:a></root>",
            OPTIONS_NS
        );
        let doc = Document::parse(&xml).unwrap();
        let a = elements(&doc, OPTIONS_NS, "a");
        assert_eq!(trimmed_text(a[0]), "padded  value");
    }

    #[test]
    fn test_child_text_equals_is_exact() {
        let xml = sample();
        let doc = Document::parse(&xml).unwrap();
        let layer = elements(&doc, OPTIONS_NS, "layer")[0];

        assert!(child_text_equals(layer, OPTIONS_NS, "itemSelected", "true"));
        assert!(!child_text_equals(layer, OPTIONS_NS, "itemSelected", "True"));
        assert!(!child_text_equals(layer, OPTIONS_NS, "missing", "true"));
    }

    #[test]
    fn test_child_text_equals_ignores_grandchildren() {
        let xml = format!(
            "<root xmlns:ecs=\"{ns}\"><ecs:outer><ecs:mid><ecs:flag>true</ecs:flag></ecs:mid></ecs:outer></root>",
            ns = OPTIONS_NS
        );
        let doc = Document::parse(&xml).unwrap();
        let outer = elements(&doc, OPTIONS_NS, "outer")[0];
        assert!(!child_text_equals(outer, OPTIONS_NS, "flag", "true"));
    }

    #[test]
    fn test_has_positive_numeric_child() {
        let xml = sample();
        let doc = Document::parse(&xml).unwrap();
        let layer = elements(&doc, OPTIONS_NS, "layer")[0];
        let band = elements(&doc, OPTIONS_NS, "band")[0];

        assert!(has_positive_numeric_child(layer, OPTIONS_NS, "value"));
        assert!(!has_positive_numeric_child(band, OPTIONS_NS, "value"));
    }

    #[test]
    fn test_has_positive_numeric_child_rejects_non_numeric() {
        let xml = format!(
            "<root xmlns:ecs=\"{}\"><ecs:a><ecs:value>high</ecs:value></ecs:a></root>",
            OPTIONS_NS
        );
        let doc = Document::parse(&xml).unwrap();
        let a = elements(&doc, OPTIONS_NS, "a")[0];
        assert!(!has_positive_numeric_child(a, OPTIONS_NS, "value"));
    }

    #[test]
    fn test_element_children_and_descendants() {
        let xml = format!(
            "<root xmlns:ecs=\"{ns}\"><ecs:a><ecs:b><ecs:c/></ecs:b>text</ecs:a></root>",
            ns = OPTIONS_NS
        );
        let doc = Document::parse(&xml).unwrap();
        let a = elements(&doc, OPTIONS_NS, "a")[0];

        let children = element_children(a);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].tag_name().name(), "b");

        let descendants = element_descendants(a);
        assert_eq!(descendants.len(), 2);
        assert_eq!(descendants[1].tag_name().name(), "c");
    }
}
