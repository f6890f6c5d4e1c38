//! INI parsing logic for converting `Ini` into `Settings`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::Settings;

/// Parse an `Ini` object into `Settings`.
///
/// Starts from `Settings::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<Settings, ConfigFileError> {
    let mut settings = Settings::default();

    // [catalog] section
    if let Some(section) = ini.section(Some("catalog")) {
        if let Some(v) = section.get("root") {
            let v = v.trim();
            if !v.is_empty() {
                settings.catalog.root = v.trim_end_matches('/').to_string();
            }
        }
    }

    // [search] section
    if let Some(section) = ini.section(Some("search")) {
        if let Some(v) = section.get("root") {
            let v = v.trim();
            if !v.is_empty() {
                settings.search.root = v.trim_end_matches('/').to_string();
            }
        }
    }

    // [http] section
    if let Some(section) = ini.section(Some("http")) {
        if let Some(v) = section.get("timeout") {
            settings.http.timeout_secs =
                v.trim()
                    .parse()
                    .map_err(|_| ConfigFileError::InvalidValue {
                        section: "http".to_string(),
                        key: "timeout".to_string(),
                        value: v.to_string(),
                        reason: "must be a whole number of seconds".to_string(),
                    })?;
        }
    }

    // [client] section
    if let Some(section) = ini.section(Some("client")) {
        if let Some(v) = section.get("correlation") {
            settings.client.correlation = v.trim().to_string();
        }
    }

    Ok(settings)
}
