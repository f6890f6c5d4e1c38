//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing logic.

use crate::http;

/// Default catalog root for service option assignment and service entry lookups.
pub const DEFAULT_CATALOG_ROOT: &str = "https://cmr.earthdata.nasa.gov/legacy-services/rest";

/// Default granule search root.
pub const DEFAULT_SEARCH_ROOT: &str = "https://cmr.earthdata.nasa.gov/search";

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Catalog settings
    pub catalog: CatalogSettings,
    /// Granule search settings
    pub search: SearchSettings,
    /// HTTP settings
    pub http: HttpSettings,
    /// Client identity settings
    pub client: ClientSettings,
}

/// Catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    /// Root URL for service option assignment and service entry lookups
    pub root: String,
}

/// Granule search configuration.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Root URL for granule searches
    pub root: String,
}

/// HTTP configuration.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Timeout in seconds for outbound requests
    pub timeout_secs: u64,
}

/// Client identity configuration.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Correlation value attached to status polls when none is given per invocation
    pub correlation: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings {
                root: DEFAULT_CATALOG_ROOT.to_string(),
            },
            search: SearchSettings {
                root: DEFAULT_SEARCH_ROOT.to_string(),
            },
            http: HttpSettings {
                timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            },
            client: ClientSettings {
                correlation: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.catalog.root, DEFAULT_CATALOG_ROOT);
        assert_eq!(settings.search.root, DEFAULT_SEARCH_ROOT);
        assert_eq!(settings.http.timeout_secs, 30);
        assert!(settings.client.correlation.is_empty());
    }
}
