//! # NAV Location Library
//!
//! Location service with pluggable driver architecture.
//!
//! This crate provides the location service binary and driver modules.
//! Drivers implement the `LocationDriver` trait defined in
//! `nav_common::location::driver` and register through a static
//! descriptor assembled into the registry at startup.
//!
//! # Module Structure
//!
//! - [`core`] - LocationCore: lifecycle, control flags, capability forwarding
//! - [`registry`] - Driver registry and selection
//! - [`control`] - Control flags and the pure transition function
//! - [`drivers`] - Location driver implementations
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                   nav_location (single crate)                  │
//! │  ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐  │
//! │  │ MessageQueue │◄───│ LocationCore │◄──►│  DriverRegistry  │  │
//! │  │ (nav_common) │    │              │    │                  │  │
//! │  └──────────────┘    └──────┬───────┘    └──────────────────┘  │
//! │                            │                                  │
//! │                            ▼                                  │
//! │                   ┌────────────────┐                          │
//! │                   │ LocationDriver │ (trait object)           │
//! │                   │     trait      │                          │
//! │                   └────────────────┘                          │
//! └────────────────────────────────────────────────────────────────┘
//! ```

#![deny(warnings)]
#![deny(missing_docs)]

pub mod control;
pub mod core;
pub mod drivers;
pub mod registry;

// Re-export key types for convenience
pub use crate::control::{ControlCommand, ControlFlags};
pub use crate::core::{LocationCore, SessionHooks};
pub use crate::registry::{DriverRegistry, Selection};
