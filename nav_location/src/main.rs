//! # NAV Location Service Binary
//!
//! Location service with pluggable driver architecture for positioning
//! data.
//!
//! # Usage
//!
//! ```bash
//! # Run with the simulated driver, polling once a second
//! nav_location --driver sim --allow
//!
//! # Run against a configuration file
//! nav_location --config config/location.toml
//!
//! # Verbose logging
//! nav_location --driver sim --allow -v
//! ```

#![deny(warnings)]

use clap::Parser;
use nav_common::config::{ConfigError, ConfigLoader, SharedConfig};
use nav_common::location::config::LocationSettings;
use nav_common::location::consts::DEFAULT_CONFIG_PATH;
use nav_common::location::types::UpdateInterval;
use nav_common::msg::LogMessageSink;
use nav_location::core::{LocationCore, SessionHooks};
use nav_location::drivers::builtin_descriptors;
use nav_location::registry::DriverRegistry;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// NAV Location Service - positioning with pluggable drivers
#[derive(Parser, Debug)]
#[command(name = "nav_location")]
#[command(author = "NAV")]
#[command(version)]
#[command(about = "Location service with pluggable driver architecture")]
#[command(long_about = None)]
struct Args {
    /// Path to the location configuration file (location.toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the configured driver (e.g., "sim", "null")
    #[arg(short, long)]
    driver: Option<String>,

    /// Allow the driver to start even when the config disables location
    #[arg(long)]
    allow: bool,

    /// Position poll interval in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

/// Service configuration loaded from location.toml.
#[derive(Debug, Deserialize)]
struct ServiceConfig {
    /// Shared service identity and logging.
    shared: Option<SharedConfig>,

    /// Location subsystem settings.
    #[serde(default)]
    location: LocationSettings,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("Location service startup failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    setup_tracing(&args);

    info!("NAV location service v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut settings = load_settings(&args.config)?;
    if let Some(driver) = &args.driver {
        info!("Driver from CLI: {driver}");
        settings.location_driver = driver.clone();
    }
    if args.allow {
        settings.location_allow = true;
    }

    let registry = DriverRegistry::new(builtin_descriptors());
    let mut core = LocationCore::new(registry, settings, Box::new(LogMessageSink));
    info!("Registered location drivers: {}", core.driver_options());
    core.set_session_hooks(SessionHooks {
        initialized: Some(Box::new(|| info!("Location session initialized"))),
        deinitialized: Some(Box::new(|| info!("Location session deinitialized"))),
    });

    // Setup signal handler.
    let running = Arc::new(AtomicBool::new(true));
    let running_flag = Arc::clone(&running);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        running_flag.store(false, Ordering::SeqCst);
    })?;

    core.init();
    match core.driver_ident() {
        Some(ident) => info!("Location driver bound: {ident}"),
        None => warn!("No location driver bound; continuing without location"),
    }

    core.set_active(true);
    core.set_interval(UpdateInterval::new(args.interval_ms, 0));

    if core.start() {
        info!("Location driver started");
    } else {
        warn!("Location driver did not start");
    }

    // Poll until shutdown is requested.
    let poll_interval = Duration::from_millis(args.interval_ms as u64);
    while running.load(Ordering::SeqCst) {
        let (ok, fix) = core.get_position();
        if ok {
            info!(
                "Position: lat={:.6} lon={:.6} (±{:.1}m / ±{:.1}m)",
                fix.latitude, fix.longitude, fix.horiz_accuracy, fix.vert_accuracy
            );
        } else {
            debug!("No position fix available");
        }
        std::thread::sleep(poll_interval);
    }

    core.stop();
    core.set_active(false);
    core.deinit();

    info!("NAV location service shutdown complete");
    Ok(())
}

/// Load location settings from the configuration file.
///
/// A missing file is tolerated with defaults, matching a fresh
/// installation; a malformed file is an error.
fn load_settings(path: &Path) -> Result<LocationSettings, ConfigError> {
    match ServiceConfig::load(path) {
        Ok(config) => {
            if let Some(shared) = &config.shared {
                shared.validate()?;
                info!("Service instance: {}", shared.service_name);
            }
            info!("Loaded configuration from {:?}", path);
            Ok(config.location)
        }
        Err(ConfigError::FileNotFound) => {
            info!("No config file at {:?}. Using defaults.", path);
            Ok(LocationSettings::default())
        }
        Err(e) => Err(e),
    }
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
