//! Submit command - compile an options document and post one order.

use std::path::{Path, PathBuf};

use clap::Args;
use serde_json::Value;

use esiorder::client::SubmitRequest;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the submit command.
#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Catalog identifier of the collection to order
    #[arg(long)]
    pub collection_id: String,

    /// Path to the options-document XML file
    #[arg(long)]
    pub model: PathBuf,

    /// Path to a JSON shapefile payload for spatial subsetting
    #[arg(long)]
    pub shapefile: Option<PathBuf>,

    /// Granule search parameter as key=value (repeatable)
    #[arg(long = "granule-param")]
    pub granule_params: Vec<String>,

    /// User-facing status page URL embedded in the order
    #[arg(long)]
    pub status_url: String,

    /// Auth token for catalog and search calls
    #[arg(long, default_value = "")]
    pub token: String,
}

/// Run the submit command.
pub fn run(args: SubmitArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("submit");

    let model = read_input(&args.model)?;
    let shapefile = match &args.shapefile {
        Some(path) => Some(read_shapefile(path)?),
        None => None,
    };
    let granule_params = parse_granule_params(&args.granule_params)?;

    let client = runner.create_client()?;
    let request = SubmitRequest {
        collection_id: args.collection_id,
        model,
        granule_params,
        status_url: args.status_url,
        token: args.token,
        shapefile,
    };

    let outcome = client.submit(&request)?;

    for diagnostic in &outcome.diagnostics {
        println!("Warning: {}", diagnostic);
    }

    println!("Order posted to: {}", outcome.service_url);
    println!("Response status: {}", outcome.response.status);
    match &outcome.response.error {
        Some(error) => println!("Transport error: {}", error),
        None => {
            println!();
            println!("{}", outcome.response.body_text());
        }
    }

    if outcome.response.is_success() {
        Ok(())
    } else {
        Err(CliError::ServiceResponse {
            status: outcome.response.status,
        })
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::FileRead {
        path: path.display().to_string(),
        error: e,
    })
}

fn read_shapefile(path: &Path) -> Result<Value, CliError> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).map_err(|e| CliError::ShapefileParse {
        path: path.display().to_string(),
        error: e,
    })
}

/// Split repeated `key=value` flags into search parameter pairs.
fn parse_granule_params(raw: &[String]) -> Result<Vec<(String, String)>, CliError> {
    raw.iter()
        .map(|item| match item.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                Ok((key.to_string(), value.to_string()))
            }
            _ => Err(CliError::GranuleParam(item.clone())),
        })
        .collect()
}
