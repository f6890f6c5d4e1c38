//! Bounding box extraction.

use roxmltree::Document;

use crate::document::query;

/// Serialization order of the four box edges.
const EDGE_ORDER: [&str; 4] = ["ullon", "lrlat", "lrlon", "ullat"];

/// Serialized bounding boxes found anywhere in the document.
///
/// Any element whose local name contains "boundingbox" is a candidate; its
/// element children supply name/text pairs, skipping blanks and the UI-only
/// "display" child. A candidate with fewer than four populated pairs is
/// dropped. Each kept box serializes as the fixed `ullon,lrlat,lrlon,ullat`
/// join; an edge missing from the collected pairs leaves its segment empty
/// rather than failing the box.
pub fn bounding_boxes(doc: &Document) -> Vec<String> {
    let mut boxes = Vec::new();

    for element in query::elements_with_name_containing(doc, "boundingbox") {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for child in query::element_children(element) {
            let name = child.tag_name().name();
            if name == "display" {
                continue;
            }
            let text = query::trimmed_text(child);
            if text.is_empty() {
                continue;
            }
            match pairs.iter_mut().find(|(n, _)| n == name) {
                Some(entry) => entry.1 = text,
                None => pairs.push((name.to_string(), text)),
            }
        }

        if pairs.len() < 4 {
            continue;
        }

        let serialized = EDGE_ORDER
            .into_iter()
            .map(|edge| {
                pairs
                    .iter()
                    .find(|(n, _)| n == edge)
                    .map(|(_, t)| t.as_str())
                    .unwrap_or("")
            })
            .collect::<Vec<_>>()
            .join(",");
        boxes.push(serialized);
    }

    boxes
}
