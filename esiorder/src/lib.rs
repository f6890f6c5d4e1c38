//! ESIOrder - Order compilation and submission for ESI services
//!
//! This library turns a customized order form into the flat parameter list an
//! EOSDIS Service Interface (ESI) endpoint accepts, resolves the endpoint that
//! serves a collection, and submits or polls orders over HTTP.
//!
//! # High-Level API
//!
//! For most use cases, the [`client`] module provides the top-level entry
//! points:
//!
//! ```ignore
//! use esiorder::client::{EsiClient, SubmitRequest};
//! use esiorder::http::ReqwestTransport;
//!
//! let transport = ReqwestTransport::new()?;
//! let client = EsiClient::new(
//!     transport,
//!     "https://cmr.earthdata.nasa.gov/legacy-services/rest",
//!     "https://cmr.earthdata.nasa.gov/search",
//! );
//!
//! let outcome = client.submit(&request)?;
//! println!("{}: {}", outcome.response.status, outcome.response.body_text());
//! ```

pub mod client;
pub mod compile;
pub mod config;
pub mod document;
pub mod endpoint;
pub mod extract;
pub mod granule;
pub mod http;
pub mod logging;
pub mod params;

/// Version of the esiorder library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
