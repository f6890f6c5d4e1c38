//! CLI runner for common setup and operations.
//!
//! Encapsulates configuration loading, logging initialization, and client
//! construction to reduce duplication across command handlers.

use std::path::Path;

use tracing::info;

use esiorder::client::EsiClient;
use esiorder::config::Settings;
use esiorder::http::ReqwestTransport;
use esiorder::logging::{default_log_dir, default_log_file, init_logging, LoggingGuard};

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration
    settings: Settings,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new() -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let settings = Settings::load().map_err(|e| CliError::Config(e.to_string()))?;

        let logging_guard = init_logging(Path::new(default_log_dir()), default_log_file())
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            settings,
        })
    }

    /// Get the loaded configuration.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("esiorder v{}", esiorder::VERSION);
        info!("esiorder CLI: {} command", command);
    }

    /// Create an order client using the configured roots and timeout.
    pub fn create_client(&self) -> Result<EsiClient<ReqwestTransport>, CliError> {
        let transport = ReqwestTransport::with_timeout(self.settings.http.timeout_secs)
            .map_err(|e| CliError::Transport(e.to_string()))?;

        Ok(EsiClient::new(
            transport,
            self.settings.catalog.root.clone(),
            self.settings.search.root.clone(),
        ))
    }
}
