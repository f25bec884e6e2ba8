//! Location value types.
//!
//! - `PositionFix` - One position report from a driver
//! - `UpdateInterval` - Update cadence hint passed to drivers

use serde::{Deserialize, Serialize};

/// A single position fix.
///
/// `Default` is the all-zero fix, which doubles as the defined failure
/// output of the forwarding layer: callers never observe uninitialized
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PositionFix {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Horizontal accuracy in meters.
    pub horiz_accuracy: f64,
    /// Vertical accuracy in meters.
    pub vert_accuracy: f64,
}

/// Update cadence hint passed to drivers via `set_interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UpdateInterval {
    /// Interval time in milliseconds.
    pub interval_ms: u32,
    /// Distance in meters at which to update.
    pub distance_m: u32,
}

impl UpdateInterval {
    /// Create a new interval hint.
    pub fn new(interval_ms: u32, distance_m: u32) -> Self {
        Self {
            interval_ms,
            distance_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_fix_default_is_zeroed() {
        let fix = PositionFix::default();
        assert_eq!(fix.latitude, 0.0);
        assert_eq!(fix.longitude, 0.0);
        assert_eq!(fix.horiz_accuracy, 0.0);
        assert_eq!(fix.vert_accuracy, 0.0);
    }

    #[test]
    fn test_update_interval_new() {
        let interval = UpdateInterval::new(500, 10);
        assert_eq!(interval.interval_ms, 500);
        assert_eq!(interval.distance_m, 10);
    }
}
