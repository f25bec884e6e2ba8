//! Simulated location driver.
//!
//! Software fix source for development and testing without positioning
//! hardware. Coordinates, accuracies, and an optional per-poll drift
//! come from the driver's section of the settings:
//!
//! ```toml
//! [location.driver_config.sim]
//! latitude = 52.2297
//! longitude = 21.0122
//! horiz_accuracy = 5.0
//! vert_accuracy = 8.0
//! drift = 0.0001
//! ```

use nav_common::location::config::LocationSettings;
use nav_common::location::driver::{
    Capability, DriverDescriptor, LocationDriver, LocationError,
};
use nav_common::location::types::{PositionFix, UpdateInterval};
use serde::Deserialize;
use tracing::{debug, info};

/// Descriptor for the simulated driver.
pub static SIM_DRIVER: DriverDescriptor = DriverDescriptor {
    ident: "sim",
    capabilities: Capability::all(),
    init: sim_init,
};

fn sim_init(settings: &LocationSettings) -> Result<Box<dyn LocationDriver>, LocationError> {
    let config = match settings.driver_config.get(SIM_DRIVER.ident) {
        Some(value) => value
            .clone()
            .try_into::<SimConfig>()
            .map_err(|e| LocationError::ConfigError(format!("Bad sim driver config: {e}")))?,
        None => SimConfig::default(),
    };

    info!(
        "Initializing sim location driver at ({:.4}, {:.4})",
        config.latitude, config.longitude
    );
    Ok(Box::new(SimDriver::new(config)))
}

/// Sim driver configuration (the `driver_config.sim` table).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Reported latitude in decimal degrees.
    pub latitude: f64,
    /// Reported longitude in decimal degrees.
    pub longitude: f64,
    /// Reported horizontal accuracy in meters.
    pub horiz_accuracy: f64,
    /// Reported vertical accuracy in meters.
    pub vert_accuracy: f64,
    /// Coordinate delta applied after each position read.
    pub drift: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            latitude: 52.2297,
            longitude: 21.0122,
            horiz_accuracy: 5.0,
            vert_accuracy: 8.0,
            drift: 0.0,
        }
    }
}

/// Simulated driver state.
pub struct SimDriver {
    /// Parsed driver configuration.
    config: SimConfig,
    /// Next fix to report.
    fix: PositionFix,
    /// Last cadence hint received.
    interval: UpdateInterval,
    /// Producing fixes.
    started: bool,
    /// Position reads served since start.
    polls: u64,
}

impl SimDriver {
    /// Create a driver reporting the configured coordinates.
    pub fn new(config: SimConfig) -> Self {
        let fix = PositionFix {
            latitude: config.latitude,
            longitude: config.longitude,
            horiz_accuracy: config.horiz_accuracy,
            vert_accuracy: config.vert_accuracy,
        };
        Self {
            config,
            fix,
            interval: UpdateInterval::default(),
            started: false,
            polls: 0,
        }
    }

    /// Last cadence hint received via `set_interval`.
    pub fn interval(&self) -> UpdateInterval {
        self.interval
    }
}

impl LocationDriver for SimDriver {
    fn start(&mut self) -> bool {
        if !self.started {
            info!("Sim location driver started");
            self.started = true;
        }
        true
    }

    fn stop(&mut self) {
        if self.started {
            info!("Sim location driver stopped after {} polls", self.polls);
            self.started = false;
        }
    }

    fn set_interval(&mut self, interval: UpdateInterval) {
        debug!(
            "Sim location driver interval: {}ms / {}m",
            interval.interval_ms, interval.distance_m
        );
        self.interval = interval;
    }

    fn get_position(&mut self) -> (bool, PositionFix) {
        if !self.started {
            return (false, PositionFix::default());
        }

        self.polls += 1;
        let fix = self.fix;
        self.fix.latitude += self.config.drift;
        self.fix.longitude += self.config.drift;
        (true, fix)
    }

    fn free(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fix_before_start() {
        let mut driver = SimDriver::new(SimConfig::default());
        let (ok, fix) = driver.get_position();
        assert!(!ok);
        assert_eq!(fix, PositionFix::default());
    }

    #[test]
    fn fix_after_start_matches_config() {
        let mut driver = SimDriver::new(SimConfig::default());
        assert!(driver.start());

        let (ok, fix) = driver.get_position();
        assert!(ok);
        assert_eq!(fix.latitude, 52.2297);
        assert_eq!(fix.longitude, 21.0122);
        assert_eq!(fix.horiz_accuracy, 5.0);
        assert_eq!(fix.vert_accuracy, 8.0);
    }

    #[test]
    fn drift_applies_per_poll() {
        let config = SimConfig {
            drift: 0.5,
            ..SimConfig::default()
        };
        let mut driver = SimDriver::new(config);
        driver.start();

        let (_, first) = driver.get_position();
        let (_, second) = driver.get_position();
        assert_eq!(second.latitude, first.latitude + 0.5);
        assert_eq!(second.longitude, first.longitude + 0.5);
    }

    #[test]
    fn stop_halts_fixes() {
        let mut driver = SimDriver::new(SimConfig::default());
        driver.start();
        assert!(driver.get_position().0);

        driver.stop();
        let (ok, fix) = driver.get_position();
        assert!(!ok);
        assert_eq!(fix, PositionFix::default());
    }

    #[test]
    fn interval_hint_is_stored() {
        let mut driver = SimDriver::new(SimConfig::default());
        driver.set_interval(UpdateInterval::new(250, 5));
        assert_eq!(driver.interval(), UpdateInterval::new(250, 5));
    }

    #[test]
    fn init_parses_driver_config_section() {
        let settings: LocationSettings = toml::from_str(
            r#"location_driver = "sim"

[driver_config.sim]
latitude = 1.5
longitude = -2.5
drift = 0.25
"#,
        )
        .unwrap();

        let mut driver = (SIM_DRIVER.init)(&settings).expect("valid config");
        driver.start();
        let (ok, fix) = driver.get_position();
        assert!(ok);
        assert_eq!(fix.latitude, 1.5);
        assert_eq!(fix.longitude, -2.5);
    }

    #[test]
    fn init_rejects_malformed_driver_config() {
        let settings: LocationSettings = toml::from_str(
            r#"[driver_config.sim]
latitude = "not a number"
"#,
        )
        .unwrap();

        assert!(matches!(
            (SIM_DRIVER.init)(&settings),
            Err(LocationError::ConfigError(_))
        ));
    }
}
