//! Granule selection from the search API.
//!
//! The caller's search parameters are replayed against the granule search
//! endpoint at submission time, and the matching granule titles become the
//! order's `FILE_IDS`. A failed or undecodable search never aborts the
//! pipeline; it degrades to an empty selection carrying a note that the
//! compiler surfaces as a diagnostic.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::http::{HttpResponse, HttpTransport};

/// Granule identifiers selected for one order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GranuleSelection {
    /// Granule titles in search-result order.
    pub ids: Vec<String>,
    /// Why the selection is empty, when the search did not complete.
    pub degraded: Option<String>,
}

impl GranuleSelection {
    fn degraded(detail: String) -> Self {
        Self {
            ids: Vec::new(),
            degraded: Some(detail),
        }
    }

    /// Comma-joined form used for the `FILE_IDS` parameter.
    pub fn file_ids(&self) -> String {
        self.ids.join(",")
    }
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    feed: SearchFeed,
}

#[derive(Debug, Deserialize)]
struct SearchFeed {
    #[serde(default)]
    entry: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(default)]
    title: String,
}

/// Queries the granule search endpoint for the granules an order covers.
pub struct GranuleCollector<T> {
    transport: T,
    search_root: String,
}

impl<T: HttpTransport> GranuleCollector<T> {
    pub fn new(transport: T, search_root: impl Into<String>) -> Self {
        Self {
            transport,
            search_root: search_root.into().trim_end_matches('/').to_string(),
        }
    }

    /// Runs the granule search and extracts the matching titles.
    ///
    /// Search parameters are URL-encoded into the query string; the token
    /// rides in the transport's auth header. Any failure shape, bad URL,
    /// error status, or undecodable body, yields an empty degraded
    /// selection instead of an error.
    pub fn collect(&self, params: &[(String, String)], token: &str) -> GranuleSelection {
        let base = format!("{}/granules.json", self.search_root);
        let url = match reqwest::Url::parse_with_params(&base, params) {
            Ok(url) => url,
            Err(e) => {
                warn!(base = %base, error = %e, "granule search URL could not be built");
                return GranuleSelection::degraded(format!("bad search URL: {}", e));
            }
        };

        let response = self.transport.get(url.as_str(), token);
        if !response.is_success() {
            let detail = describe_failure(&response);
            info!(status = response.status, detail = %detail, "granule search failed");
            return GranuleSelection::degraded(detail);
        }

        match serde_json::from_slice::<SearchBody>(&response.body) {
            Ok(body) => {
                let ids: Vec<String> = body.feed.entry.into_iter().map(|e| e.title).collect();
                debug!(count = ids.len(), "granule search returned entries");
                GranuleSelection {
                    ids,
                    degraded: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "granule search body could not be decoded");
                GranuleSelection::degraded(format!("undecodable search body: {}", e))
            }
        }
    }
}

fn describe_failure(response: &HttpResponse) -> String {
    match &response.error {
        Some(error) => format!("status {}: {}", response.status, error),
        None => format!("status {}: {}", response.status, response.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::{MockTransport, RecordedRequest};
    use crate::http::CONNECTION_FAILED_STATUS;

    fn search_params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn feed_body(titles: &[&str]) -> Vec<u8> {
        let entries: Vec<serde_json::Value> = titles
            .iter()
            .map(|t| serde_json::json!({ "title": t }))
            .collect();
        serde_json::json!({ "feed": { "entry": entries } })
            .to_string()
            .into_bytes()
    }

    #[test]
    fn test_collect_extracts_titles_in_order() {
        let mock = MockTransport::new();
        mock.push_response(HttpResponse::new(200, feed_body(&["G1.hdf", "G2.hdf"])));
        let collector = GranuleCollector::new(mock, "https://search.example.com");

        let selection = collector.collect(&search_params(&[("echo_collection_id", "C1-X")]), "tok");

        assert_eq!(selection.ids, vec!["G1.hdf", "G2.hdf"]);
        assert!(selection.degraded.is_none());
        assert_eq!(selection.file_ids(), "G1.hdf,G2.hdf");
    }

    #[test]
    fn test_collect_builds_encoded_search_url() {
        let mock = MockTransport::new();
        mock.push_response(HttpResponse::new(200, feed_body(&[])));
        let collector = GranuleCollector::new(mock.clone(), "https://search.example.com/");

        collector.collect(
            &search_params(&[("echo_collection_id", "C1-X"), ("temporal", "2002-05-01,2002-06-01")]),
            "tok",
        );

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        match &requests[0] {
            RecordedRequest::Get { url, token } => {
                assert_eq!(
                    url,
                    "https://search.example.com/granules.json?echo_collection_id=C1-X&temporal=2002-05-01%2C2002-06-01"
                );
                assert_eq!(token, "tok");
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_collect_empty_feed_is_not_degraded() {
        let mock = MockTransport::new();
        mock.push_response(HttpResponse::new(
            200,
            br#"{"feed":{}}"#.to_vec(),
        ));
        let collector = GranuleCollector::new(mock, "https://search.example.com");

        let selection = collector.collect(&[], "tok");

        assert!(selection.ids.is_empty());
        assert!(selection.degraded.is_none());
        assert_eq!(selection.file_ids(), "");
    }

    #[test]
    fn test_collect_error_status_degrades() {
        let mock = MockTransport::new();
        mock.push_response(HttpResponse::new(403, b"forbidden".to_vec()));
        let collector = GranuleCollector::new(mock, "https://search.example.com");

        let selection = collector.collect(&[], "tok");

        assert!(selection.ids.is_empty());
        let detail = selection.degraded.unwrap();
        assert!(detail.contains("403"), "detail: {}", detail);
        assert!(detail.contains("forbidden"), "detail: {}", detail);
    }

    #[test]
    fn test_collect_transport_failure_degrades() {
        let mock = MockTransport::new();
        mock.push_response(HttpResponse::transport_failure(
            CONNECTION_FAILED_STATUS,
            "connection refused",
        ));
        let collector = GranuleCollector::new(mock, "https://search.example.com");

        let selection = collector.collect(&[], "tok");

        let detail = selection.degraded.unwrap();
        assert!(detail.contains("500"), "detail: {}", detail);
        assert!(detail.contains("connection refused"), "detail: {}", detail);
    }

    #[test]
    fn test_collect_undecodable_body_degrades() {
        let mock = MockTransport::new();
        mock.push_response(HttpResponse::new(200, b"<html>not json</html>".to_vec()));
        let collector = GranuleCollector::new(mock, "https://search.example.com");

        let selection = collector.collect(&[], "tok");

        assert!(selection.ids.is_empty());
        assert!(selection.degraded.unwrap().contains("undecodable"));
    }

    #[test]
    fn test_collect_tolerates_entries_without_title() {
        let mock = MockTransport::new();
        mock.push_response(HttpResponse::new(
            200,
            br#"{"feed":{"entry":[{"title":"G1.hdf"},{"id":"no-title"}]}}"#.to_vec(),
        ));
        let collector = GranuleCollector::new(mock, "https://search.example.com");

        let selection = collector.collect(&[], "tok");

        assert_eq!(selection.ids, vec!["G1.hdf", ""]);
        assert_eq!(selection.file_ids(), "G1.hdf,");
    }
}
