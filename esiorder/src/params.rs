//! Ordered order-parameter map.
//!
//! [`OrderParameters`] is the flat name/value set the compiler assembles and
//! the submission POST consumes. Insertion order is preserved because the
//! downstream service logs and some operators diff submitted bodies; a
//! re-written key keeps its original position and takes the new value.

use serde_json::Value;

/// Flat, ordered parameter set for one order submission.
///
/// Keys follow first-insert ordering with last-write values. Most writes go
/// through [`set_if_present`](Self::set_if_present), which drops blank
/// values so absent form fields never surface as empty parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderParameters {
    entries: Vec<(String, String)>,
}

impl OrderParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a parameter unconditionally. An existing key keeps its
    /// position and takes the new value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Writes a parameter only when the value is non-blank. A blank value
    /// leaves any existing entry untouched.
    pub fn set_if_present(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.set(key, value);
    }

    /// Looks up a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order, as the form-encoded POST body source.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Serializes the entries as a JSON array of `[name, value]` pairs,
    /// preserving insertion order for audit logging.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|(k, v)| Value::Array(vec![Value::from(k.as_str()), Value::from(v.as_str())]))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_insertion_order() {
        let mut params = OrderParameters::new();
        params.set("FORMAT", "GeoTIFF");
        params.set("CLIENT", "ESI");
        params.set("EMAIL", "someone@example.com");

        let keys: Vec<&str> = params.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["FORMAT", "CLIENT", "EMAIL"]);
    }

    #[test]
    fn test_rewrite_keeps_position_takes_new_value() {
        let mut params = OrderParameters::new();
        params.set("BBOX", "scalar");
        params.set("CLIENT", "ESI");
        params.set("BBOX", "-10,20,30,40");

        let keys: Vec<&str> = params.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["BBOX", "CLIENT"]);
        assert_eq!(params.get("BBOX"), Some("-10,20,30,40"));
    }

    #[test]
    fn test_set_if_present_drops_blank_values() {
        let mut params = OrderParameters::new();
        params.set_if_present("FORMAT", "");
        params.set_if_present("CLIENT", "   ");
        params.set_if_present("EMAIL", "someone@example.com");

        assert_eq!(params.len(), 1);
        assert!(!params.contains("FORMAT"));
        assert!(!params.contains("CLIENT"));
    }

    #[test]
    fn test_set_if_present_blank_leaves_existing_value() {
        let mut params = OrderParameters::new();
        params.set("BBOX", "scalar");
        params.set_if_present("BBOX", "");
        assert_eq!(params.get("BBOX"), Some("scalar"));
    }

    #[test]
    fn test_set_allows_empty_value() {
        let mut params = OrderParameters::new();
        params.set("FILE_IDS", "");
        assert_eq!(params.get("FILE_IDS"), Some(""));
    }

    #[test]
    fn test_to_json_preserves_order() {
        let mut params = OrderParameters::new();
        params.set("B", "2");
        params.set("A", "1");

        assert_eq!(
            params.to_json().to_string(),
            r#"[["B","2"],["A","1"]]"#
        );
    }
}
