//! Control state for the location service.
//!
//! Two orthogonal flags with one compound reset, not a general state
//! machine. The transition function is pure so it can be tested with no
//! driver or I/O in the picture; `LocationCore` routes every flag change
//! through it.

/// Process-visibility and teardown-responsibility flags.
///
/// Both flags rest at `false` and return there on [`ControlCommand::Destroy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlFlags {
    /// Subsystem is externally visible as active.
    pub active: bool,
    /// This module, not an external owner, is responsible for freeing
    /// the bound driver instance.
    pub owns_driver: bool,
}

/// Typed control commands over the flag pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Hard reset: both flags false. The owning context also clears its
    /// binding reference without freeing the instance.
    Destroy,
    /// Mark this module responsible for freeing the bound instance.
    SetOwnDriver,
    /// Mark an external owner responsible for the bound instance.
    UnsetOwnDriver,
    /// Query `owns_driver`.
    OwnsDriver,
    /// Mark the subsystem active.
    SetActive,
    /// Mark the subsystem inactive.
    UnsetActive,
    /// Query `active`.
    IsActive,
}

impl ControlFlags {
    /// Apply one command, returning the updated flags and the outcome.
    ///
    /// Mutating commands report `true`; queries report their flag's
    /// current value and leave the flags untouched.
    pub fn apply(self, command: ControlCommand) -> (Self, bool) {
        match command {
            ControlCommand::Destroy => (Self::default(), true),
            ControlCommand::SetOwnDriver => (
                Self {
                    owns_driver: true,
                    ..self
                },
                true,
            ),
            ControlCommand::UnsetOwnDriver => (
                Self {
                    owns_driver: false,
                    ..self
                },
                true,
            ),
            ControlCommand::OwnsDriver => (self, self.owns_driver),
            ControlCommand::SetActive => (Self { active: true, ..self }, true),
            ControlCommand::UnsetActive => (
                Self {
                    active: false,
                    ..self
                },
                true,
            ),
            ControlCommand::IsActive => (self, self.active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_rest_at_false() {
        let flags = ControlFlags::default();
        assert!(!flags.active);
        assert!(!flags.owns_driver);
    }

    #[test]
    fn set_active_then_query() {
        let (flags, ok) = ControlFlags::default().apply(ControlCommand::SetActive);
        assert!(ok);

        let (after, active) = flags.apply(ControlCommand::IsActive);
        assert!(active);
        assert_eq!(after, flags, "queries must not mutate");
    }

    #[test]
    fn own_driver_round_trip() {
        let (flags, _) = ControlFlags::default().apply(ControlCommand::SetOwnDriver);
        assert!(flags.apply(ControlCommand::OwnsDriver).1);
        assert!(!flags.active, "flags are orthogonal");

        let (flags, _) = flags.apply(ControlCommand::UnsetOwnDriver);
        assert!(!flags.apply(ControlCommand::OwnsDriver).1);
    }

    #[test]
    fn destroy_resets_both_flags_unconditionally() {
        let (flags, _) = ControlFlags::default().apply(ControlCommand::SetActive);
        let (flags, _) = flags.apply(ControlCommand::SetOwnDriver);

        let (flags, ok) = flags.apply(ControlCommand::Destroy);
        assert!(ok);
        assert!(!flags.apply(ControlCommand::IsActive).1);
        assert!(!flags.apply(ControlCommand::OwnsDriver).1);
    }

    #[test]
    fn queries_report_current_value() {
        let flags = ControlFlags::default();
        assert!(!flags.apply(ControlCommand::IsActive).1);
        assert!(!flags.apply(ControlCommand::OwnsDriver).1);
    }
}
