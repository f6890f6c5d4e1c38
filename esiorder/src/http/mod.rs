//! HTTP transport abstraction for testability.
//!
//! Every network-facing component in this crate is generic over
//! [`HttpTransport`], allowing mock transports to be injected in tests.
//! The real implementation is [`ReqwestTransport`], a blocking client —
//! the whole pipeline is strictly sequential request/response, so nothing
//! here suspends or fans out.
//!
//! Transport failures never surface as `Err` values. Connection failures
//! and timeouts are folded into an [`HttpResponse`] carrying a synthetic
//! status code, and every caller is expected to branch on
//! [`HttpResponse::is_success`] before touching the body.

use std::time::Duration;

use tracing::{debug, warn};

/// Header carrying the catalog/search authentication token.
pub const TOKEN_HEADER: &str = "Echo-Token";

/// Header carrying the caller's correlation value on status polls.
pub const CORRELATION_HEADER: &str = "X-REQUEST-CORRELATION";

/// Synthetic status for a connection that could not be established.
pub const CONNECTION_FAILED_STATUS: u16 = 500;

/// Synthetic status for a request that timed out.
pub const TIMEOUT_STATUS: u16 = 503;

/// Default timeout for all requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent on every request.
const USER_AGENT: &str = concat!("esiorder/", env!("CARGO_PKG_VERSION"));

/// Outcome of one HTTP exchange.
///
/// Both real responses and transport failures take this shape; a failure
/// carries a synthetic status ([`CONNECTION_FAILED_STATUS`] or
/// [`TIMEOUT_STATUS`]), an empty body, and the underlying error text in
/// `error` for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code, or a synthetic code for transport failures.
    pub status: u16,
    /// Raw response body. Empty on transport failure.
    pub body: Vec<u8>,
    /// Transport-level error text, when the exchange never completed.
    pub error: Option<String>,
}

impl HttpResponse {
    /// Creates a completed response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            body,
            error: None,
        }
    }

    /// Creates a transport-failure response with a synthetic status.
    pub fn transport_failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            body: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// True when the exchange completed with a non-error status.
    ///
    /// Callers must check this before reading `body`.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status < 400
    }

    /// Response body decoded as UTF-8, lossily.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for synchronous HTTP operations.
///
/// The three methods match the three exchange shapes the pipeline needs:
/// token-authenticated catalog/search reads, correlation-tagged status
/// polls, and the URL-encoded order submission POST.
pub trait HttpTransport: Send + Sync {
    /// Performs a GET, attaching the token as an `Echo-Token` header when
    /// it is non-empty.
    fn get(&self, url: &str, token: &str) -> HttpResponse;

    /// Performs a GET against an order-status endpoint, attaching the
    /// caller's correlation value as an `X-REQUEST-CORRELATION` header.
    fn get_with_correlation(&self, url: &str, correlation: &str) -> HttpResponse;

    /// Performs a POST with an `application/x-www-form-urlencoded` body
    /// built from the given pairs, in order.
    fn post_form(&self, url: &str, params: &[(String, String)]) -> HttpResponse;
}

/// Errors constructing the real transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The underlying HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(String),
}

/// Real transport backed by `reqwest::blocking`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a transport with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }

    fn dispatch(&self, url: &str, request: reqwest::blocking::RequestBuilder) -> HttpResponse {
        match request.send() {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url = url, status = status, "HTTP response received");
                match response.bytes() {
                    Ok(bytes) => HttpResponse::new(status, bytes.to_vec()),
                    Err(e) => {
                        warn!(url = url, error = %e, "failed to read response body");
                        HttpResponse::transport_failure(CONNECTION_FAILED_STATUS, e.to_string())
                    }
                }
            }
            Err(e) => {
                let status = if e.is_timeout() {
                    TIMEOUT_STATUS
                } else {
                    CONNECTION_FAILED_STATUS
                };
                warn!(
                    url = url,
                    error = %e,
                    is_timeout = e.is_timeout(),
                    is_connect = e.is_connect(),
                    "HTTP request failed"
                );
                HttpResponse::transport_failure(status, e.to_string())
            }
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new().expect("failed to create default HTTP transport")
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, token: &str) -> HttpResponse {
        let mut request = self.client.get(url);
        if !token.is_empty() {
            request = request.header(TOKEN_HEADER, token);
        }
        self.dispatch(url, request)
    }

    fn get_with_correlation(&self, url: &str, correlation: &str) -> HttpResponse {
        let request = self.client.get(url).header(CORRELATION_HEADER, correlation);
        self.dispatch(url, request)
    }

    fn post_form(&self, url: &str, params: &[(String, String)]) -> HttpResponse {
        let request = self.client.post(url).form(&params);
        self.dispatch(url, request)
    }
}
