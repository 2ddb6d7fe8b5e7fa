//! Hook traits consumed by the movement orchestrator.
//!
//! The engine never owns travelling entities. It reads and writes their
//! location and coordinate fields through [`Traveler`] and notifies
//! locations through a single engine-wide [`RoomHooks`] implementation.
//! All hooks are synchronous and may fail with a [`HookError`].

use crate::error::HookError;
use crate::id::{Coord, EntityId, RoomRef};
use crate::options::{LastKnown, MoveOptions};

/// An object that can occupy a location and be moved around the grid.
pub trait Traveler {
    /// Stable identity of this entity.
    fn entity_id(&self) -> EntityId;

    /// The location the entity is currently in.
    fn location(&self) -> Option<RoomRef>;

    /// Overwrite the entity's location. Called only by the engine.
    fn set_location(&mut self, location: Option<RoomRef>);

    /// The grid coordinate the entity is currently at.
    fn coordinates(&self) -> Option<Coord>;

    /// Overwrite the entity's coordinate. Called only by the engine.
    fn set_coordinates(&mut self, coordinates: Option<Coord>);

    /// The last persisted position, if any.
    fn last_known(&self) -> Option<LastKnown> {
        None
    }

    /// Persist the last valid position.
    fn set_last_known(&mut self, _last: LastKnown) {}

    /// Asked before any state is touched. Return `Ok(false)` to decline.
    ///
    /// `destination` is `None` when the target coordinate has no active
    /// location yet; `coordinates` is then the only information available.
    /// The default declines a move with neither.
    fn pre_move(
        &mut self,
        destination: Option<RoomRef>,
        coordinates: Option<Coord>,
    ) -> Result<bool, HookError> {
        Ok(destination.is_some() || coordinates.is_some())
    }

    /// Tell the old location's occupants the entity is leaving.
    fn announce_departure(
        &mut self,
        _destination: RoomRef,
        _options: &MoveOptions,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// Tell the new location's occupants the entity has arrived.
    fn announce_arrival(
        &mut self,
        _source: Option<RoomRef>,
        _options: &MoveOptions,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// Called last, once the entity is in its new location (usually to look).
    fn post_move(&mut self, _source: Option<RoomRef>) -> Result<(), HookError> {
        Ok(())
    }
}

/// Location-side hooks, invoked for both static and dynamic locations.
///
/// Must be `Send` so the engine can live behind the process-wide lock.
pub trait RoomHooks: Send {
    /// `entity` is about to leave `room` for `destination`.
    fn on_entity_leaving(
        &mut self,
        _room: RoomRef,
        _entity: EntityId,
        _destination: RoomRef,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// `entity` has arrived in `room`, coming from `source`.
    fn on_entity_arrived(
        &mut self,
        _room: RoomRef,
        _entity: EntityId,
        _source: Option<RoomRef>,
    ) -> Result<(), HookError> {
        Ok(())
    }
}

/// [`RoomHooks`] that accepts everything and does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRoomHooks;

impl RoomHooks for NoopRoomHooks {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare {
        location: Option<RoomRef>,
        coordinates: Option<Coord>,
    }

    impl Traveler for Bare {
        fn entity_id(&self) -> EntityId {
            EntityId(1)
        }
        fn location(&self) -> Option<RoomRef> {
            self.location
        }
        fn set_location(&mut self, location: Option<RoomRef>) {
            self.location = location;
        }
        fn coordinates(&self) -> Option<Coord> {
            self.coordinates
        }
        fn set_coordinates(&mut self, coordinates: Option<Coord>) {
            self.coordinates = coordinates;
        }
    }

    #[test]
    fn default_pre_move_needs_a_target() {
        let mut b = Bare {
            location: None,
            coordinates: None,
        };
        assert_eq!(b.pre_move(None, None), Ok(false));
        assert_eq!(b.pre_move(None, Some(Coord::new(0, 0))), Ok(true));
        let room = RoomRef {
            index: 0,
            generation: 0,
        };
        assert_eq!(b.pre_move(Some(room), None), Ok(true));
    }

    #[test]
    fn default_hooks_succeed() {
        let mut b = Bare {
            location: None,
            coordinates: None,
        };
        let room = RoomRef {
            index: 0,
            generation: 0,
        };
        let opts = MoveOptions::default();
        assert!(b.announce_departure(room, &opts).is_ok());
        assert!(b.announce_arrival(None, &opts).is_ok());
        assert!(b.post_move(None).is_ok());
        assert!(b.last_known().is_none());

        let mut hooks = NoopRoomHooks;
        assert!(hooks.on_entity_leaving(room, EntityId(1), room).is_ok());
        assert!(hooks.on_entity_arrived(room, EntityId(1), None).is_ok());
    }
}
