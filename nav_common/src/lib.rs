//! NAV Common Library
//!
//! This crate provides shared configuration loading utilities and the
//! location subsystem contract for all NAV workspace crates.
//!
//! # Module Structure
//!
//! - [`config`] - Configuration loading traits and types
//! - [`location`] - Location driver contract, settings, and value types
//! - [`msg`] - User-facing notification queue
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use nav_common::location::driver::LocationDriver;
//! use nav_common::config::{ConfigLoader, SharedConfig};
//! ```

pub mod config;
pub mod location;
pub mod msg;
pub mod prelude;
