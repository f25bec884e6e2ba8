//! Location subsystem constants.

/// Canonical location service name (used for logging and config sections).
pub const LOCATION_SERVICE_NAME: &str = "location";

/// Driver selected when the configuration names none.
pub const DEFAULT_LOCATION_DRIVER: &str = "null";

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/nav/location.toml";

/// User message shown when `start` is blocked by `location_allow = false`.
pub const MSG_LOCATION_DISABLED: &str = "Location is explicitly disabled.";

/// Queue priority of the location-disabled message (low).
pub const MSG_LOCATION_DISABLED_PRIORITY: u8 = 1;

/// Display duration of the location-disabled message, in UI ticks.
pub const MSG_LOCATION_DISABLED_TICKS: u32 = 180;
