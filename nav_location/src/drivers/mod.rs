//! Location driver implementations.
//!
//! This module contains all location driver implementations:
//!
//! - [`sim`] - Software fix source for development and testing
//! - [`null`] - No-op driver, always registered last
//!
//! # Adding New Drivers
//!
//! 1. Create a new submodule under `drivers/`
//! 2. Implement the `LocationDriver` trait from `nav_common::location::driver`
//!    and declare a static `DriverDescriptor`
//! 3. Add the descriptor to `builtin_descriptors()` ahead of the null entry
//! 4. Add export and documentation

pub mod null;
pub mod sim;

use nav_common::location::driver::DriverDescriptor;

/// Assemble the built-in driver list in registration order.
///
/// Platform-specific descriptors go ahead of the null entry. The null
/// driver stays last so selection always has a working fallback and the
/// empty-registry abort stays unreachable in shipped builds.
pub fn builtin_descriptors() -> Vec<&'static DriverDescriptor> {
    vec![
        &sim::SIM_DRIVER,
        // Platform sensor drivers will be registered here:
        // &gpsd::GPSD_DRIVER,
        &null::NULL_DRIVER,
    ]
}
