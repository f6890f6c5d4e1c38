//! Service endpoint resolution.
//!
//! A collection does not carry its fulfillment URL directly; the catalog
//! links collection to service entry through a service option assignment.
//! Resolution is two sequential lookups, assignment then entry, and any
//! failure along the chain is an error the caller must handle. There is no
//! retry here.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::http::HttpTransport;

/// Errors from the two-hop endpoint lookup.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The assignment lookup returned an error status.
    #[error("service option assignment lookup for {collection_id} failed with status {status}")]
    AssignmentLookup { collection_id: String, status: u16 },

    /// The catalog has no service option assignment for the collection.
    #[error("no service option assignment found for {collection_id}")]
    AssignmentMissing { collection_id: String },

    /// The service entry lookup returned an error status.
    #[error("service entry lookup for {entry_id} failed with status {status}")]
    EntryLookup { entry_id: String, status: u16 },

    /// A catalog body did not have the expected shape.
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct AssignmentRecord {
    service_option_assignment: Assignment,
}

#[derive(Debug, Deserialize)]
struct Assignment {
    service_entry_id: String,
}

#[derive(Debug, Deserialize)]
struct EntryRecord {
    service_entry: Entry,
}

#[derive(Debug, Deserialize)]
struct Entry {
    url: String,
}

/// Resolves a collection identifier to its order submission URL.
pub struct ServiceEndpointResolver<T> {
    transport: T,
    catalog_root: String,
}

impl<T: HttpTransport> ServiceEndpointResolver<T> {
    pub fn new(transport: T, catalog_root: impl Into<String>) -> Self {
        Self {
            transport,
            catalog_root: catalog_root.into().trim_end_matches('/').to_string(),
        }
    }

    /// Two catalog hops: collection to service entry id, then entry id to
    /// URL. Only the first assignment record is consulted.
    pub fn resolve(&self, collection_id: &str, token: &str) -> Result<String, ResolveError> {
        let url = format!(
            "{}/service_option_assignments.json?catalog_item_id={}",
            self.catalog_root, collection_id
        );
        let response = self.transport.get(&url, token);
        if !response.is_success() {
            return Err(ResolveError::AssignmentLookup {
                collection_id: collection_id.to_string(),
                status: response.status,
            });
        }

        let assignments: Vec<AssignmentRecord> = serde_json::from_slice(&response.body)?;
        let entry_id = assignments
            .into_iter()
            .next()
            .map(|record| record.service_option_assignment.service_entry_id)
            .ok_or_else(|| ResolveError::AssignmentMissing {
                collection_id: collection_id.to_string(),
            })?;

        let url = format!("{}/service_entries/{}.json", self.catalog_root, entry_id);
        let response = self.transport.get(&url, token);
        if !response.is_success() {
            return Err(ResolveError::EntryLookup {
                entry_id,
                status: response.status,
            });
        }

        let record: EntryRecord = serde_json::from_slice(&response.body)?;
        debug!(
            collection_id = collection_id,
            service_url = %record.service_entry.url,
            "service endpoint resolved"
        );
        Ok(record.service_entry.url)
    }
}
