//! Persisted world state and the storage seam it is saved through.

use crate::pool::{ExitGarage, RoomPool};
use crate::registry::RoomRegistry;

/// Everything the engine persists across restarts: the registry and both
/// pools.
///
/// Terrain, catalog and the description RNG are rebuilt from
/// configuration; dynamic-room text is transient and re-applied on attach.
#[derive(Clone, Debug, Default)]
pub struct WorldState {
    pub(crate) registry: RoomRegistry,
    pub(crate) rooms: RoomPool,
    pub(crate) exits: ExitGarage,
}

impl WorldState {
    /// Empty state pre-sized for `capacity` locations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: RoomRegistry::with_capacity(capacity),
            rooms: RoomPool::with_capacity(capacity),
            exits: ExitGarage::with_capacity(capacity.saturating_mul(4)),
        }
    }

    /// Active locations by coordinate.
    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// All locations, live and pooled.
    pub fn rooms(&self) -> &RoomPool {
        &self.rooms
    }

    /// All exits, live and garaged.
    pub fn exits(&self) -> &ExitGarage {
        &self.exits
    }
}

/// Somewhere to keep a [`WorldState`] between engine lifetimes.
pub trait WorldStore {
    /// The last saved state, if any.
    fn load(&mut self) -> Option<WorldState>;

    /// Replace the saved state.
    fn save(&mut self, state: WorldState);
}

/// [`WorldStore`] held in memory, for tests and single-process servers.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Option<WorldState>,
}

impl MemoryStore {
    /// Whether a state has been saved.
    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }
}

impl WorldStore for MemoryStore {
    fn load(&mut self) -> Option<WorldState> {
        self.state.clone()
    }

    fn save(&mut self, state: WorldState) {
        self.state = Some(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildmap_core::Coord;

    #[test]
    fn memory_store_round_trips_state() {
        let mut store = MemoryStore::default();
        assert!(store.is_empty());
        assert!(store.load().is_none());

        let mut state = WorldState::with_capacity(2);
        let room = state
            .rooms
            .allocate(crate::room::Location::Dynamic(Default::default()))
            .unwrap();
        state.registry.put(Coord::new(1, 1), room);
        store.save(state);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.registry().get(Coord::new(1, 1)), Some(room));
        assert_eq!(loaded.rooms().live_count(), 1);
        // Loading does not consume the saved copy.
        assert!(store.load().is_some());
    }
}
