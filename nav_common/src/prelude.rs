//! Prelude module for common re-exports.
//!
//! This module provides convenient re-exports of commonly used types
//! so that consumers can do `use nav_common::prelude::*;` and get
//! the most important types without listing individual paths.

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};
pub use crate::location::config::LocationSettings;

// ─── Location Driver Contract ───────────────────────────────────────
pub use crate::location::driver::{
    Capability, DriverDescriptor, DriverInit, LocationDriver, LocationError,
};
pub use crate::location::types::{PositionFix, UpdateInterval};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::location::consts::{DEFAULT_LOCATION_DRIVER, LOCATION_SERVICE_NAME};

// ─── User Notifications ─────────────────────────────────────────────
pub use crate::msg::{LogMessageSink, MessageQueue, MessageSink, Notification};
