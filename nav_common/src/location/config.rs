//! Location subsystem settings.
//!
//! The settings are consumed read-only by the location service: the
//! allow flag gates `start`, the driver name feeds selection, and the
//! per-driver table is handed to the selected driver's factory.

use crate::location::consts::DEFAULT_LOCATION_DRIVER;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default function for location_driver
fn default_location_driver() -> String {
    DEFAULT_LOCATION_DRIVER.to_string()
}

/// Settings consumed by the location subsystem.
///
/// # TOML Example
///
/// ```toml
/// [location]
/// location_allow = true
/// location_driver = "sim"
///
/// [location.driver_config.sim]
/// latitude = 52.2297
/// longitude = 21.0122
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSettings {
    /// Whether starting the location driver is allowed at all.
    #[serde(default)]
    pub location_allow: bool,

    /// Name of the driver to select (e.g., "sim", "null").
    #[serde(default = "default_location_driver")]
    pub location_driver: String,

    /// Per-driver configuration sections.
    /// Key = driver ident, Value = driver-specific TOML table.
    #[serde(default)]
    pub driver_config: HashMap<String, toml::Value>,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            location_allow: false,
            location_driver: default_location_driver(),
            driver_config: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = LocationSettings::default();
        assert!(!settings.location_allow);
        assert_eq!(settings.location_driver, DEFAULT_LOCATION_DRIVER);
        assert!(settings.driver_config.is_empty());
    }

    #[test]
    fn test_settings_empty_toml_uses_defaults() {
        let settings: LocationSettings = toml::from_str("").unwrap();
        assert!(!settings.location_allow);
        assert_eq!(settings.location_driver, "null");
    }

    #[test]
    fn test_settings_from_toml_with_driver_config() {
        let settings: LocationSettings = toml::from_str(
            r#"location_allow = true
location_driver = "sim"

[driver_config.sim]
latitude = 52.2297
longitude = 21.0122
"#,
        )
        .unwrap();

        assert!(settings.location_allow);
        assert_eq!(settings.location_driver, "sim");

        let sim = settings.driver_config.get("sim").expect("sim section");
        let latitude = sim
            .as_table()
            .and_then(|table| table.get("latitude"))
            .and_then(|value| value.as_float());
        assert_eq!(latitude, Some(52.2297));
    }
}
