//! No-op location driver.
//!
//! Registered last in every build so driver selection always has a
//! working fallback. Init always succeeds; position reads report failure
//! with a zeroed fix.

use nav_common::location::config::LocationSettings;
use nav_common::location::driver::{
    Capability, DriverDescriptor, LocationDriver, LocationError,
};
use nav_common::location::types::{PositionFix, UpdateInterval};

/// Descriptor for the null driver.
pub static NULL_DRIVER: DriverDescriptor = DriverDescriptor {
    ident: "null",
    capabilities: Capability::all(),
    init: null_init,
};

fn null_init(_settings: &LocationSettings) -> Result<Box<dyn LocationDriver>, LocationError> {
    Ok(Box::new(NullDriver))
}

/// Driver that accepts every call and produces nothing.
pub struct NullDriver;

impl LocationDriver for NullDriver {
    fn start(&mut self) -> bool {
        true
    }

    fn stop(&mut self) {}

    fn set_interval(&mut self, _interval: UpdateInterval) {}

    fn get_position(&mut self) -> (bool, PositionFix) {
        (false, PositionFix::default())
    }

    fn free(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_init_always_succeeds() {
        let settings = LocationSettings::default();
        assert!((NULL_DRIVER.init)(&settings).is_ok());
    }

    #[test]
    fn null_driver_contract() {
        let mut driver = NullDriver;
        assert!(driver.start());

        let (ok, fix) = driver.get_position();
        assert!(!ok);
        assert_eq!(fix, PositionFix::default());

        driver.set_interval(UpdateInterval::new(1000, 0));
        driver.stop();
        driver.free();
    }
}
