//! LocationCore: lifecycle, control flags, and capability forwarding.
//!
//! `LocationCore` is the owned context for the whole subsystem. It holds
//! the registry, the consumed settings, at most one live driver binding,
//! and the two control flags. There is no internal locking: the owning
//! runtime serializes init/deinit against capability calls, and none of
//! these operations block the caller.

use crate::control::{ControlCommand, ControlFlags};
use crate::registry::DriverRegistry;
use nav_common::location::config::LocationSettings;
use nav_common::location::consts::{
    MSG_LOCATION_DISABLED, MSG_LOCATION_DISABLED_PRIORITY, MSG_LOCATION_DISABLED_TICKS,
};
use nav_common::location::driver::{Capability, DriverDescriptor, LocationDriver};
use nav_common::location::types::{PositionFix, UpdateInterval};
use nav_common::msg::{MessageSink, Notification};
use tracing::{error, info};

/// Process exit code for unrecoverable startup failures.
const STARTUP_FAILURE_CODE: i32 = 1;

/// Optional callbacks the owning session registers around lifecycle
/// transitions.
#[derive(Default)]
pub struct SessionHooks {
    /// Invoked at the end of `init()`, once per non-idempotent call,
    /// even when driver init fails.
    pub initialized: Option<Box<dyn FnMut() + Send>>,
    /// Invoked during `deinit()` before driver teardown.
    pub deinitialized: Option<Box<dyn FnMut() + Send>>,
}

/// The single live pairing of a selected descriptor with its instance.
///
/// The descriptor reference is non-owning (descriptors are static
/// registry entries); the instance is owned. At most one binding exists
/// per core.
struct ActiveBinding {
    descriptor: &'static DriverDescriptor,
    instance: Box<dyn LocationDriver>,
}

/// Owned context for the location subsystem.
pub struct LocationCore {
    /// Registered drivers, fixed at construction.
    registry: DriverRegistry,
    /// Consumed settings (allow flag, driver name, driver config).
    settings: LocationSettings,
    /// Live driver binding, if any.
    binding: Option<ActiveBinding>,
    /// Control flags (active, owns_driver).
    flags: ControlFlags,
    /// Session lifecycle hooks.
    hooks: SessionHooks,
    /// User notification sink.
    messages: Box<dyn MessageSink>,
}

impl LocationCore {
    /// Create a core over `registry` with the given settings.
    ///
    /// Notifications produced by the capability layer go to `messages`.
    pub fn new(
        registry: DriverRegistry,
        settings: LocationSettings,
        messages: Box<dyn MessageSink>,
    ) -> Self {
        Self {
            registry,
            settings,
            binding: None,
            flags: ControlFlags::default(),
            hooks: SessionHooks::default(),
            messages,
        }
    }

    /// Register session hooks, replacing any previous registration.
    pub fn set_session_hooks(&mut self, hooks: SessionHooks) {
        self.hooks = hooks;
    }

    /// Replace the consumed settings.
    ///
    /// The configuration UI may flip `location_allow` at runtime; the
    /// driver name only takes effect at the next `init()`.
    pub fn update_settings(&mut self, settings: LocationSettings) {
        self.settings = settings;
    }

    /// Registered driver idents joined with `|`, for the configuration UI.
    pub fn driver_options(&self) -> String {
        self.registry.list_idents()
    }

    /// Ident of the currently bound driver, if any.
    pub fn driver_ident(&self) -> Option<&'static str> {
        self.binding.as_ref().map(|binding| binding.descriptor.ident)
    }

    // ─── Lifecycle ──────────────────────────────────────────────────

    /// Initialize the subsystem: select a driver and bring up one instance.
    ///
    /// Re-running while a binding exists is a no-op; a second instance
    /// would leak the first. Driver-level init failure is not fatal: the
    /// error is logged, the active flag is cleared, and the subsystem
    /// continues running disabled. An empty registry, by contrast, is a
    /// packaging defect and aborts startup.
    ///
    /// The `initialized` session hook fires once at the end of every
    /// non-no-op call, even when driver init failed: registered sessions
    /// pair the callback with `init()`, not with a live driver.
    pub fn init(&mut self) {
        if self.binding.is_some() {
            return;
        }

        let Ok(selection) = self.registry.resolve(&self.settings.location_driver) else {
            fatal_startup("LocationCore::init");
        };
        let Some(descriptor) = self.registry.get(selection.index) else {
            fatal_startup("LocationCore::init");
        };

        info!("Initializing location driver \"{}\"", descriptor.ident);

        match (descriptor.init)(&self.settings) {
            Ok(instance) => {
                self.binding = Some(ActiveBinding {
                    descriptor,
                    instance,
                });
            }
            Err(e) => {
                error!("Failed to initialize location driver: {e}. Will continue without location.");
                self.flags = self.flags.apply(ControlCommand::UnsetActive).0;
            }
        }

        if let Some(hook) = self.hooks.initialized.as_mut() {
            hook();
        }
    }

    /// Tear down the live binding, if any.
    ///
    /// Fires the `deinitialized` hook and the driver's `free` capability
    /// (when declared) before release. Safe to call with nothing bound;
    /// no binding survives the call either way.
    pub fn deinit(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            if let Some(hook) = self.hooks.deinitialized.as_mut() {
                hook();
            }

            if binding.descriptor.capabilities.contains(Capability::FREE) {
                binding.instance.free();
            }

            info!("Location driver \"{}\" deinitialized", binding.descriptor.ident);
        }

        self.binding = None;
    }

    // ─── Control ────────────────────────────────────────────────────

    /// Hard reset: both control flags false and the binding reference
    /// cleared without invoking the driver's `free` capability.
    ///
    /// The detached instance is returned so an external owner (see
    /// [`Self::set_owns`]) can tear it down on its own terms; discarding
    /// the return value drops the instance without driver teardown.
    pub fn destroy(&mut self) -> Option<Box<dyn LocationDriver>> {
        self.flags = self.flags.apply(ControlCommand::Destroy).0;
        self.binding.take().map(|binding| binding.instance)
    }

    /// Mark whether this module frees the bound instance.
    pub fn set_owns(&mut self, owns: bool) {
        let command = if owns {
            ControlCommand::SetOwnDriver
        } else {
            ControlCommand::UnsetOwnDriver
        };
        self.flags = self.flags.apply(command).0;
    }

    /// True when this module is responsible for freeing the bound instance.
    pub fn owns(&self) -> bool {
        self.flags.apply(ControlCommand::OwnsDriver).1
    }

    /// Set the externally visible active flag.
    pub fn set_active(&mut self, active: bool) {
        let command = if active {
            ControlCommand::SetActive
        } else {
            ControlCommand::UnsetActive
        };
        self.flags = self.flags.apply(command).0;
    }

    /// True when the subsystem is externally visible as active.
    pub fn is_active(&self) -> bool {
        self.flags.apply(ControlCommand::IsActive).1
    }

    /// Current control flags.
    pub fn flags(&self) -> ControlFlags {
        self.flags
    }

    // ─── Capability forwarding ──────────────────────────────────────

    /// Forward `start` to the bound driver.
    ///
    /// Requires a bound instance, the START capability, and
    /// `location_allow = true`. A startable driver blocked by the allow
    /// flag pushes one user notification and fails; a missing binding or
    /// capability fails silently.
    pub fn start(&mut self) -> bool {
        let Some(binding) = self.binding.as_mut() else {
            return false;
        };
        if !binding.descriptor.capabilities.contains(Capability::START) {
            return false;
        }

        if self.settings.location_allow {
            return binding.instance.start();
        }

        self.messages.push(Notification::info(
            MSG_LOCATION_DISABLED,
            MSG_LOCATION_DISABLED_PRIORITY,
            MSG_LOCATION_DISABLED_TICKS,
        ));
        false
    }

    /// Forward `stop` to the bound driver. Fire-and-forget: nothing
    /// distinguishes "nothing to do" from "forwarded".
    pub fn stop(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            if binding.descriptor.capabilities.contains(Capability::STOP) {
                binding.instance.stop();
            }
        }
    }

    /// Forward an update cadence hint to the bound driver. Fire-and-forget.
    pub fn set_interval(&mut self, interval: UpdateInterval) {
        if let Some(binding) = self.binding.as_mut() {
            if binding
                .descriptor
                .capabilities
                .contains(Capability::SET_INTERVAL)
            {
                binding.instance.set_interval(interval);
            }
        }
    }

    /// Forward a position read to the bound driver.
    ///
    /// On any guard failure the returned fix is fully zeroed, so callers
    /// never observe uninitialized coordinates.
    pub fn get_position(&mut self) -> (bool, PositionFix) {
        if let Some(binding) = self.binding.as_mut() {
            if binding
                .descriptor
                .capabilities
                .contains(Capability::GET_POSITION)
            {
                return binding.instance.get_position();
            }
        }

        (false, PositionFix::default())
    }
}

/// Abort process startup.
///
/// Reached only when the registry has zero entries at selection time: a
/// build defect, not a runtime condition a user can trigger. The platform
/// assembly step keeps the null driver registered last precisely so this
/// path stays unreachable in shipped builds.
fn fatal_startup(initializer: &str) -> ! {
    error!("Fatal error in {initializer}: no location drivers registered");
    std::process::exit(STARTUP_FAILURE_CODE)
}
