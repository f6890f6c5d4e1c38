//! User configuration loaded from ~/.esiorder/config.ini.
//!
//! The file is optional. Every key has a default, and a missing file means
//! defaults across the board, so a fresh install works with no setup.
//!
//! # Example
//!
//! ```
//! use esiorder::config::Settings;
//!
//! let settings = Settings::default();
//! assert!(settings.catalog.root.starts_with("https://"));
//! ```

mod file;
mod parser;
mod settings;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    CatalogSettings, ClientSettings, HttpSettings, SearchSettings, Settings,
    DEFAULT_CATALOG_ROOT, DEFAULT_SEARCH_ROOT,
};
