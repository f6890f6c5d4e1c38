//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use esiorder::endpoint::ResolveError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to build the HTTP transport
    Transport(String),
    /// Failed to read an input file
    FileRead { path: String, error: std::io::Error },
    /// Shapefile payload is not valid JSON
    ShapefileParse {
        path: String,
        error: serde_json::Error,
    },
    /// Granule search parameter is not in key=value form
    GranuleParam(String),
    /// Failed to resolve the service endpoint for a collection
    Resolve(ResolveError),
    /// The service answered with an error status
    ServiceResponse { status: u16 },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Resolve(ResolveError::AssignmentMissing { .. }) => {
                eprintln!();
                eprintln!("The collection has no service option assignment, so there is");
                eprintln!("no endpoint to send orders to. Check that:");
                eprintln!("  1. The collection id is correct");
                eprintln!("  2. The collection is configured for subsetting orders");
            }
            CliError::GranuleParam(_) => {
                eprintln!();
                eprintln!("Granule search parameters are passed as repeated flags:");
                eprintln!("  --granule-param echo_collection_id=C1000-TEST \\");
                eprintln!("  --granule-param temporal=2024-01-01,2024-02-01");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Transport(msg) => write!(f, "Failed to build HTTP transport: {}", msg),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            CliError::ShapefileParse { path, error } => {
                write!(f, "Failed to parse shapefile '{}': {}", path, error)
            }
            CliError::GranuleParam(raw) => {
                write!(f, "Invalid granule search parameter '{}': expected key=value", raw)
            }
            CliError::Resolve(e) => write!(f, "Failed to resolve service endpoint: {}", e),
            CliError::ServiceResponse { status } => {
                write!(f, "Service responded with status {}", status)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::FileRead { error, .. } => Some(error),
            CliError::ShapefileParse { error, .. } => Some(error),
            CliError::Resolve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(e: ResolveError) -> Self {
        CliError::Resolve(e)
    }
}
