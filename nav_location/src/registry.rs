//! Driver registry and selection for the location service.
//!
//! The registry is an immutable, ordered list of driver descriptors
//! assembled once at startup by the platform assembly step
//! (`drivers::builtin_descriptors`). Selection resolves the configured
//! driver name to a registry index, falling back to the first entry when
//! the name is unknown.

use nav_common::location::driver::{DriverDescriptor, LocationError};
use tracing::{info, warn};

/// Delimiter used when enumerating driver idents for the configuration UI.
const IDENT_DELIMITER: char = '|';

/// Immutable ordered registry of location driver descriptors.
///
/// Insertion order is significant: it defines enumeration order and the
/// fallback target (index 0). Constructed once and passed to
/// `LocationCore` by value. No global state — testable in isolation.
pub struct DriverRegistry {
    entries: Vec<&'static DriverDescriptor>,
}

/// Outcome of resolving a configured driver name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index of the selected descriptor.
    pub index: usize,
    /// True when the configured name was unknown and index 0 was used.
    pub fallback: bool,
}

impl DriverRegistry {
    /// Build a registry from descriptors in registration order.
    pub fn new(entries: Vec<&'static DriverDescriptor>) -> Self {
        Self { entries }
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no drivers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptor at `idx`, or `None` past the populated range.
    pub fn get(&self, idx: usize) -> Option<&'static DriverDescriptor> {
        self.entries.get(idx).copied()
    }

    /// Ident of the descriptor at `idx`, or `None` past the populated range.
    pub fn ident_of(&self, idx: usize) -> Option<&'static str> {
        self.get(idx).map(|descriptor| descriptor.ident)
    }

    /// All registered idents in registry order, joined with `|`.
    ///
    /// Consumed by the external configuration UI for driver enumeration.
    pub fn list_idents(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(IDENT_DELIMITER);
            }
            out.push_str(entry.ident);
        }
        out
    }

    /// Resolve `configured` to a registry index.
    ///
    /// Exact, case-sensitive match; first match wins (idents are unique
    /// by registration convention, not enforced). An unknown name falls
    /// back to index 0 after a diagnostic listing every available driver.
    ///
    /// # Errors
    /// Returns `LocationError::EmptyRegistry` when no drivers are
    /// registered at all, a build defect the caller treats as fatal.
    pub fn resolve(&self, configured: &str) -> Result<Selection, LocationError> {
        if self.entries.is_empty() {
            return Err(LocationError::EmptyRegistry);
        }

        if let Some(index) = self
            .entries
            .iter()
            .position(|descriptor| descriptor.ident == configured)
        {
            return Ok(Selection {
                index,
                fallback: false,
            });
        }

        warn!("Couldn't find any location driver named \"{configured}\"");
        info!("Available location drivers: {}", self.list_idents());
        warn!(
            "Going to default to first location driver ({})",
            self.entries[0].ident
        );

        Ok(Selection {
            index: 0,
            fallback: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_common::location::config::LocationSettings;
    use nav_common::location::driver::{Capability, LocationDriver};

    struct TestDriver;

    impl LocationDriver for TestDriver {}

    fn test_init(
        _settings: &LocationSettings,
    ) -> Result<Box<dyn LocationDriver>, LocationError> {
        Ok(Box::new(TestDriver))
    }

    static ALPHA: DriverDescriptor = DriverDescriptor {
        ident: "alpha",
        capabilities: Capability::all(),
        init: test_init,
    };

    static BETA: DriverDescriptor = DriverDescriptor {
        ident: "beta",
        capabilities: Capability::empty(),
        init: test_init,
    };

    fn test_registry() -> DriverRegistry {
        DriverRegistry::new(vec![&ALPHA, &BETA])
    }

    #[test]
    fn registry_get_in_range() {
        let registry = test_registry();
        for idx in 0..registry.len() {
            assert!(registry.get(idx).is_some(), "entry {idx} should exist");
        }
        assert_eq!(registry.get(0).map(|d| d.ident), Some("alpha"));
        assert_eq!(registry.get(1).map(|d| d.ident), Some("beta"));
    }

    #[test]
    fn registry_get_past_populated_range() {
        let registry = test_registry();
        assert!(registry.get(registry.len()).is_none());
        assert!(registry.ident_of(registry.len()).is_none());
    }

    #[test]
    fn registry_ident_of() {
        let registry = test_registry();
        assert_eq!(registry.ident_of(0), Some("alpha"));
        assert_eq!(registry.ident_of(1), Some("beta"));
    }

    #[test]
    fn registry_list_idents_in_order() {
        assert_eq!(test_registry().list_idents(), "alpha|beta");

        let single = DriverRegistry::new(vec![&ALPHA]);
        assert_eq!(single.list_idents(), "alpha");
    }

    #[test]
    fn resolve_exact_match() {
        let registry = test_registry();
        let selection = registry.resolve("beta").expect("non-empty registry");
        assert_eq!(selection.index, 1);
        assert!(!selection.fallback);
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let registry = test_registry();
        let selection = registry.resolve("Alpha").expect("non-empty registry");
        assert_eq!(selection.index, 0);
        assert!(selection.fallback);
    }

    #[test]
    fn resolve_unknown_name_falls_back_to_first() {
        let registry = test_registry();
        let selection = registry.resolve("gps").expect("non-empty registry");
        assert_eq!(selection.index, 0);
        assert!(selection.fallback);
    }

    #[test]
    fn resolve_empty_registry_is_an_error() {
        let registry = DriverRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert!(matches!(
            registry.resolve("alpha"),
            Err(LocationError::EmptyRegistry)
        ));
    }
}
