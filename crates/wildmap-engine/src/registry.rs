//! Coordinate → active location map.

use indexmap::IndexMap;
use tracing::trace;
use wildmap_core::{Coord, RoomRef};

/// The set of currently active locations, keyed by coordinate.
///
/// Holds at most one location per coordinate, and no location under two
/// coordinates; both are maintained by the engine, not checked here.
#[derive(Clone, Debug, Default)]
pub struct RoomRegistry {
    entries: IndexMap<Coord, RoomRef>,
}

impl RoomRegistry {
    /// An empty registry pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// The location active at `coord`.
    pub fn get(&self, coord: Coord) -> Option<RoomRef> {
        self.entries.get(&coord).copied()
    }

    /// Bind `coord` to `room`, returning any previous binding.
    pub fn put(&mut self, coord: Coord, room: RoomRef) -> Option<RoomRef> {
        trace!(x = coord.x, y = coord.y, %room, "registry put");
        self.entries.insert(coord, room)
    }

    /// Drop the binding at `coord`. Returns whether one existed.
    pub fn remove(&mut self, coord: Coord) -> bool {
        let removed = self.entries.swap_remove(&coord).is_some();
        if removed {
            trace!(x = coord.x, y = coord.y, "registry remove");
        }
        removed
    }

    /// Whether `coord` has an active location.
    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Number of active locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(coord, room)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, RoomRef)> + '_ {
        self.entries.iter().map(|(c, r)| (*c, *r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(index: u32) -> RoomRef {
        RoomRef {
            index,
            generation: 0,
        }
    }

    #[test]
    fn put_get_remove() {
        let mut reg = RoomRegistry::default();
        let c = Coord::new(3, 4);
        assert_eq!(reg.put(c, room(1)), None);
        assert_eq!(reg.get(c), Some(room(1)));
        assert!(reg.contains(c));
        assert!(reg.remove(c));
        assert!(!reg.remove(c));
        assert!(reg.get(c).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn put_overwrites() {
        let mut reg = RoomRegistry::with_capacity(4);
        let c = Coord::new(0, 0);
        reg.put(c, room(1));
        assert_eq!(reg.put(c, room(2)), Some(room(1)));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(c), Some(room(2)));
    }

    #[test]
    fn iter_lists_every_binding() {
        let mut reg = RoomRegistry::default();
        reg.put(Coord::new(0, 0), room(0));
        reg.put(Coord::new(1, 0), room(1));
        reg.put(Coord::new(2, 0), room(2));
        reg.remove(Coord::new(0, 0));
        let mut rooms: Vec<_> = reg.iter().map(|(_, r)| r.index).collect();
        rooms.sort_unstable();
        assert_eq!(rooms, vec![1, 2]);
    }
}
