//! Order submission and status client.
//!
//! [`EsiClient`] ties the pipeline together: resolve the service endpoint,
//! compile the parameter body, log one audit record, POST. Status polling
//! is independent of submission and keyed by the order id(s) the service
//! returned; both polling forms accept a pre-resolved service URL so
//! callers that already know the endpoint skip the catalog hops.

use serde_json::Value;
use tracing::info;

use crate::compile::{CompileDiagnostic, CompileOutcome, CompileRequest, OrderCompiler};
use crate::endpoint::{ResolveError, ServiceEndpointResolver};
use crate::granule::GranuleCollector;
use crate::http::{HttpResponse, HttpTransport};
use crate::params::OrderParameters;

/// Everything one order submission needs.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// Catalog identifier of the collection being ordered.
    pub collection_id: String,
    /// Raw options-document XML.
    pub model: String,
    /// Query parameters replayed against the granule search.
    pub granule_params: Vec<(String, String)>,
    /// User-facing status page URL, embedded in `CLIENT_STRING`.
    pub status_url: String,
    /// Auth token for catalog and search calls.
    pub token: String,
    /// Optional spatial constraint payload.
    pub shapefile: Option<Value>,
}

/// How to reach the status endpoint for an order's collection.
#[derive(Debug, Clone)]
pub struct StatusLookup {
    pub collection_id: String,
    pub token: String,
    /// Opaque caller correlation value, forwarded unmodified in the
    /// request header.
    pub correlation: String,
    /// Pre-resolved service URL; `None` re-resolves through the catalog.
    pub service_url: Option<String>,
}

/// What a submission produced.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Endpoint the order was posted to.
    pub service_url: String,
    /// Exact parameter set sent.
    pub parameters: OrderParameters,
    /// Non-fatal compilation problems, empty on a clean run.
    pub diagnostics: Vec<CompileDiagnostic>,
    /// The service's response to the POST.
    pub response: HttpResponse,
}

/// Client for the order fulfillment service.
pub struct EsiClient<T: HttpTransport + Clone> {
    transport: T,
    resolver: ServiceEndpointResolver<T>,
    compiler: OrderCompiler<T>,
}

impl<T: HttpTransport + Clone> EsiClient<T> {
    pub fn new(
        transport: T,
        catalog_root: impl Into<String>,
        search_root: impl Into<String>,
    ) -> Self {
        let resolver = ServiceEndpointResolver::new(transport.clone(), catalog_root);
        let compiler = OrderCompiler::new(GranuleCollector::new(transport.clone(), search_root));
        Self {
            transport,
            resolver,
            compiler,
        }
    }

    /// Resolves, compiles, and posts one order.
    ///
    /// Endpoint resolution failure is the only error path; compilation
    /// problems ride along as diagnostics and the POST still happens. The
    /// full parameter set is logged before the POST so every submitted
    /// body can be reconstructed from the logs.
    pub fn submit(&self, request: &SubmitRequest) -> Result<SubmissionOutcome, ResolveError> {
        let service_url = self.resolver.resolve(&request.collection_id, &request.token)?;

        let CompileOutcome {
            parameters,
            diagnostics,
        } = self.compiler.compile(&CompileRequest {
            model: &request.model,
            status_url: &request.status_url,
            granule_params: &request.granule_params,
            token: &request.token,
            shapefile: request.shapefile.as_ref(),
        });

        info!(
            collection_id = %request.collection_id,
            service_url = %service_url,
            parameters = %parameters.to_json(),
            "submitting order"
        );

        let response = self.transport.post_form(&service_url, parameters.entries());

        Ok(SubmissionOutcome {
            service_url,
            parameters,
            diagnostics,
            response,
        })
    }

    /// Status of a single order, using the path-segment form.
    pub fn order_status(
        &self,
        lookup: &StatusLookup,
        order_id: &str,
    ) -> Result<HttpResponse, ResolveError> {
        let service_url = self.status_endpoint(lookup)?;
        let url = format!("{}/{}", service_url, order_id);
        Ok(self.transport.get_with_correlation(&url, &lookup.correlation))
    }

    /// Status of one or more orders, always using the array-query form.
    ///
    /// Order ids are opaque URL-safe strings by contract and are placed in
    /// the query string without further encoding.
    pub fn multi_order_status(
        &self,
        lookup: &StatusLookup,
        order_ids: &[String],
    ) -> Result<HttpResponse, ResolveError> {
        let service_url = self.status_endpoint(lookup)?;
        let query: Vec<String> = order_ids
            .iter()
            .map(|id| format!("requestId[]={}", id))
            .collect();
        let url = format!("{}?{}", service_url, query.join("&"));
        Ok(self.transport.get_with_correlation(&url, &lookup.correlation))
    }

    fn status_endpoint(&self, lookup: &StatusLookup) -> Result<String, ResolveError> {
        match &lookup.service_url {
            Some(url) => Ok(url.clone()),
            None => self.resolver.resolve(&lookup.collection_id, &lookup.token),
        }
    }
}
