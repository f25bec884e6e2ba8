//! Location driver contract and error types.
//!
//! This module defines:
//! - `LocationDriver` trait - Interface for pluggable location drivers
//! - `DriverDescriptor` struct - Registry entry describing one driver
//! - `Capability` bitflags - Per-capability presence declaration
//! - `DriverInit` type alias - Instance factory function type
//! - `LocationError` enum - Error types for location operations

use crate::location::config::LocationSettings;
use crate::location::types::{PositionFix, UpdateInterval};
use bitflags::bitflags;
use thiserror::Error;

/// Error types for location subsystem operations.
#[derive(Debug, Clone, Error)]
pub enum LocationError {
    /// Driver initialization failed
    #[error("Initialization failed: {0}")]
    InitFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Driver not found
    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    /// Registry contains no drivers (a build/packaging defect)
    #[error("No location drivers registered")]
    EmptyRegistry,
}

bitflags! {
    /// Capability subset a driver descriptor declares.
    ///
    /// Drivers implement an optional subset of the capability surface.
    /// The forwarding layer checks presence before every call and never
    /// assumes uniformity across drivers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capability: u8 {
        /// Driver can start producing fixes.
        const START        = 0x01;
        /// Driver can stop producing fixes.
        const STOP         = 0x02;
        /// Driver accepts update-interval hints.
        const SET_INTERVAL = 0x04;
        /// Driver can report the current position.
        const GET_POSITION = 0x08;
        /// Driver has explicit teardown beyond drop.
        const FREE         = 0x10;
    }
}

/// Factory function type producing a live driver instance.
///
/// An `Err` here is a driver-level init failure: the subsystem continues
/// running disabled. It is never fatal to the process.
pub type DriverInit = fn(&LocationSettings) -> Result<Box<dyn LocationDriver>, LocationError>;

/// Registry entry describing one driver implementation.
///
/// Descriptors are immutable after registration and never mutated at
/// runtime. The registry holds them in a fixed order that defines both
/// enumeration and fallback behavior.
pub struct DriverDescriptor {
    /// Unique driver identifier (e.g., "sim", "null").
    /// Uniqueness is a registration convention, not enforced.
    pub ident: &'static str,
    /// Capability subset this driver implements.
    pub capabilities: Capability,
    /// Instance factory.
    pub init: DriverInit,
}

/// Trait defining the interface for location drivers.
///
/// The service owns at most one live instance at a time and reaches it
/// only through the capability-forwarding layer, which consults the
/// descriptor's [`Capability`] flags before every call. Methods for
/// undeclared capabilities are therefore never invoked; the default
/// bodies exist so partial drivers stay partial.
///
/// # Lifecycle
///
/// 1. Descriptor `init` - produces the instance, once per `init()` cycle
/// 2. `start` / `stop` / `set_interval` / `get_position` - forwarded calls
/// 3. `free` - explicit teardown during `deinit()`, if declared
pub trait LocationDriver: Send {
    /// Begin producing position fixes.
    ///
    /// Returns `false` when the driver could not start.
    fn start(&mut self) -> bool {
        false
    }

    /// Stop producing position fixes. Fire-and-forget.
    fn stop(&mut self) {}

    /// Update cadence hint. Fire-and-forget.
    fn set_interval(&mut self, _interval: UpdateInterval) {}

    /// Report the current position.
    ///
    /// On failure the returned fix must be fully zeroed so callers never
    /// observe stale or uninitialized coordinates.
    fn get_position(&mut self) -> (bool, PositionFix) {
        (false, PositionFix::default())
    }

    /// Explicit teardown for drivers declaring [`Capability::FREE`].
    fn free(&mut self) {}
}
