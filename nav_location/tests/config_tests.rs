//! Configuration loading tests for the service file format.
//!
//! The binary reads a `location.toml` with an optional `[shared]` table
//! and a `[location]` table; these tests pin that shape.

use nav_common::config::{ConfigLoader, SharedConfig};
use nav_common::location::config::LocationSettings;
use serde::Deserialize;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, Deserialize)]
struct ServiceConfig {
    shared: Option<SharedConfig>,
    #[serde(default)]
    location: LocationSettings,
}

#[test]
fn full_service_config_parses() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[shared]
log_level = "debug"
service_name = "nav-location-01"

[location]
location_allow = true
location_driver = "sim"

[location.driver_config.sim]
latitude = 48.8566
longitude = 2.3522
drift = 0.001
"#
    )
    .unwrap();
    file.flush().unwrap();

    let config = ServiceConfig::load(file.path()).unwrap();

    let shared = config.shared.expect("shared table present");
    assert!(shared.validate().is_ok());
    assert_eq!(shared.service_name, "nav-location-01");

    assert!(config.location.location_allow);
    assert_eq!(config.location.location_driver, "sim");
    assert!(config.location.driver_config.contains_key("sim"));
}

#[test]
fn minimal_service_config_uses_location_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "").unwrap();
    file.flush().unwrap();

    let config = ServiceConfig::load(file.path()).unwrap();
    assert!(config.shared.is_none());
    assert!(!config.location.location_allow);
    assert_eq!(config.location.location_driver, "null");
}
