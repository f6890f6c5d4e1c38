//! Status command - poll the status of submitted orders.

use clap::Args;

use esiorder::client::StatusLookup;
use esiorder::http::HttpResponse;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the status command.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Catalog identifier of the ordered collection
    #[arg(long)]
    pub collection_id: String,

    /// Order id to poll (repeatable)
    #[arg(long = "order-id", required = true)]
    pub order_ids: Vec<String>,

    /// Pre-resolved service URL; skips the catalog lookup
    #[arg(long)]
    pub service_url: Option<String>,

    /// Auth token for catalog calls
    #[arg(long, default_value = "")]
    pub token: String,

    /// Correlation value forwarded in the request header
    #[arg(long)]
    pub correlation: Option<String>,

    /// Use the multi-order query form even for a single id
    #[arg(long)]
    pub multi: bool,
}

/// Run the status command.
pub fn run(args: StatusArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("status");

    // Per-invocation correlation wins over the configured default.
    let correlation = args
        .correlation
        .unwrap_or_else(|| runner.settings().client.correlation.clone());

    let client = runner.create_client()?;
    let lookup = StatusLookup {
        collection_id: args.collection_id,
        token: args.token,
        correlation,
        service_url: args.service_url,
    };

    let response = match args.order_ids.as_slice() {
        [single] if !args.multi => client.order_status(&lookup, single)?,
        ids => client.multi_order_status(&lookup, ids)?,
    };

    print_response(&response)
}

fn print_response(response: &HttpResponse) -> Result<(), CliError> {
    println!("Response status: {}", response.status);
    match &response.error {
        Some(error) => println!("Transport error: {}", error),
        None => {
            println!();
            println!("{}", response.body_text());
        }
    }

    if response.is_success() {
        Ok(())
    } else {
        Err(CliError::ServiceResponse {
            status: response.status,
        })
    }
}
