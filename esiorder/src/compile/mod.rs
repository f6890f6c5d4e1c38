//! Order parameter compilation.
//!
//! [`OrderCompiler`] turns one submission request into the flat
//! [`OrderParameters`] body: it collects the granule selection, normalizes
//! and parses the options document, then runs the field extractors in a
//! fixed stage order. Nothing in compilation unwinds; problems that leave
//! the order submittable (a failed granule search, an unparsable document)
//! are carried as [`CompileDiagnostic`] values next to whatever parameters
//! were assembled.

use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::document;
use crate::extract;
use crate::granule::GranuleCollector;
use crate::http::HttpTransport;
use crate::params::OrderParameters;

/// Inputs for one compilation run.
#[derive(Debug, Clone)]
pub struct CompileRequest<'a> {
    /// Raw options-document XML.
    pub model: &'a str,
    /// User-facing status page URL, embedded in `CLIENT_STRING`.
    pub status_url: &'a str,
    /// Query parameters replayed against the granule search.
    pub granule_params: &'a [(String, String)],
    /// Auth token for the granule search.
    pub token: &'a str,
    /// Optional spatial constraint payload for `BoundingShape`.
    pub shapefile: Option<&'a Value>,
}

/// Non-fatal problems observed during compilation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileDiagnostic {
    /// The granule search failed; the order carries an empty `FILE_IDS`.
    #[error("granule search degraded to an empty selection: {detail}")]
    GranuleSearchDegraded { detail: String },

    /// The options document did not parse; only the granule-derived
    /// parameters were assembled.
    #[error("options document unusable: {detail}")]
    DocumentUnusable { detail: String },
}

/// What a compilation run produced.
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    pub parameters: OrderParameters,
    pub diagnostics: Vec<CompileDiagnostic>,
}

/// Compiles an options document plus granule selection into order
/// parameters.
pub struct OrderCompiler<T> {
    granules: GranuleCollector<T>,
}

impl<T: HttpTransport> OrderCompiler<T> {
    pub fn new(granules: GranuleCollector<T>) -> Self {
        Self { granules }
    }

    /// Runs the full stage sequence.
    ///
    /// The granule-derived parameters are written first and survive even a
    /// completely unusable document, so a submission always carries
    /// `FILE_IDS` and `CLIENT_STRING`.
    pub fn compile(&self, request: &CompileRequest) -> CompileOutcome {
        let mut parameters = OrderParameters::new();
        let mut diagnostics = Vec::new();

        let selection = self.granules.collect(request.granule_params, request.token);
        if let Some(detail) = selection.degraded {
            diagnostics.push(CompileDiagnostic::GranuleSearchDegraded { detail });
        }
        parameters.set("FILE_IDS", selection.ids.join(","));
        parameters.set(
            "CLIENT_STRING",
            format!(
                "To view the status of your request, please see: {}",
                request.status_url
            ),
        );

        let normalized = document::normalize(request.model);
        match roxmltree::Document::parse(&normalized) {
            Ok(doc) => extract_document_fields(&doc, request.shapefile, &mut parameters),
            Err(e) => {
                error!(
                    error = %e,
                    "options document could not be parsed; submitting without field-derived parameters"
                );
                diagnostics.push(CompileDiagnostic::DocumentUnusable {
                    detail: e.to_string(),
                });
            }
        }

        CompileOutcome {
            parameters,
            diagnostics,
        }
    }
}

/// Field extraction stages, in their fixed order.
fn extract_document_fields(
    doc: &roxmltree::Document,
    shapefile: Option<&Value>,
    parameters: &mut OrderParameters,
) {
    for field in extract::TOP_LEVEL_FIELDS {
        parameters.set_if_present(field, extract::field_text(doc, field));
    }

    // A recognized switch spelling replaces the raw scalar value in place;
    // any other text survives from the scalar pass untouched.
    if let Some(mapped) = extract::switch_value(&extract::field_text(doc, "INCLUDE_META")) {
        parameters.set("INCLUDE_META", mapped);
    }

    parameters.set_if_present("PROJECTION_PARAMETERS", extract::projection_parameters(doc));
    parameters.set_if_present("RESAMPLE", extract::resample(doc));
    parameters.set_if_present("SUBSET_DATA_LAYERS", extract::subset_data_layers(doc));

    // Boxes found in the tree replace any scalar BBOX value in place; no
    // boxes means the scalar value, if any, stands.
    let boxes = extract::bounding_boxes(doc);
    if !boxes.is_empty() {
        parameters.set("BBOX", boxes.join(","));
    }

    if let Some(shape) = shapefile {
        if extract::shapefile_requested(doc) {
            parameters.set("BoundingShape", shape.to_string());
        }
    }

    parameters.set("EMAIL", extract::field_text(doc, "email"));
}
