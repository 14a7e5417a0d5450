//! Composite visit service
//!
//! A full visit registers the caller inside the geofence and then swaps
//! trackables with the cache. The two steps are independent writes; if the
//! visitor registration fails, the exchange never runs.

use crate::GeoCacheRegistry;
use geocache_core::{Caller, Coord, RegistryResult, Trackable};
use geocache_storage::StateStore;

/// Thin composition layer over [`GeoCacheRegistry`].
#[derive(Debug, Clone, Default)]
pub struct GeoCacheService {
    registry: GeoCacheRegistry,
}

impl GeoCacheService {
    pub fn new(registry: GeoCacheRegistry) -> Self {
        Self { registry }
    }

    /// Register a visit at `(x, y)` and exchange `trackable` for the
    /// cache's current one, returning the token previously held by the
    /// cache.
    ///
    /// No rollback: a failed exchange after a successful registration
    /// leaves the visit logged, matching the two-write contract of the
    /// underlying operations.
    pub fn log_visit(
        &self,
        store: &dyn StateStore,
        caller: &Caller,
        key: &str,
        x: Coord,
        y: Coord,
        trackable: Trackable,
    ) -> RegistryResult<Trackable> {
        self.registry.add_visitor(store, caller, key, x, y)?;
        self.registry.switch_trackable(store, trackable, key)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use geocache_core::{RegistryError, SeededRandom};
    use geocache_storage::MockStore;

    const KEY: &str = "cache001";

    fn setup() -> (GeoCacheService, MockStore) {
        let registry = GeoCacheRegistry::new();
        let store = MockStore::new();
        let mut rng = SeededRandom::new(11);
        registry
            .create(
                &store,
                &mut rng,
                &Caller::new("alice", "Alice"),
                KEY,
                "Bridge cache",
                "Under the old bridge",
                [5, 10],
                [5, 10],
                "a wooden coin",
            )
            .unwrap();
        (GeoCacheService::new(registry), store)
    }

    #[test]
    fn log_visit_registers_and_swaps() {
        let (service, store) = setup();
        let visitor = Caller::new("bob", "Bob");

        let received = service
            .log_visit(&store, &visitor, KEY, 6, 6, Trackable::new("mine", "a marble"))
            .unwrap();

        assert_eq!(received.value, "a wooden coin");

        let record = GeoCacheRegistry::new().read(&store, KEY).unwrap();
        assert_eq!(record.visitors, vec![visitor]);
        assert_eq!(record.trackable, Trackable::new("mine", "a marble"));
    }

    #[test]
    fn log_visit_outside_the_fence_swaps_nothing() {
        let (service, store) = setup();
        let visitor = Caller::new("bob", "Bob");

        let err = service
            .log_visit(&store, &visitor, KEY, 5, 5, Trackable::new("mine", "a marble"))
            .unwrap_err();

        assert!(matches!(err, RegistryError::OutOfRange { .. }));

        let record = GeoCacheRegistry::new().read(&store, KEY).unwrap();
        assert!(record.visitors.is_empty());
        assert_eq!(record.trackable.value, "a wooden coin");
    }

    #[test]
    fn log_visit_on_absent_key_fails_not_found() {
        let (service, _) = setup();
        let empty = MockStore::new();

        let err = service
            .log_visit(
                &empty,
                &Caller::new("bob", "Bob"),
                KEY,
                6,
                6,
                Trackable::new("mine", "a marble"),
            )
            .unwrap_err();

        assert!(matches!(err, RegistryError::NotFound { .. }));
    }
}
