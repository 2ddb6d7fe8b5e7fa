//! Movement orchestration.
//!
//! A move either *merges* the entity into the location already active at
//! the target, or *materializes* one there: the entity's own location is
//! re-keyed in place when nobody else is in it, otherwise a location is
//! drawn from the pool (or allocated).
//!
//! # Hook ordering and consistency
//!
//! ```text
//! pre_move ─► on_entity_leaving ─► announce_departure ─┐
//!                                                     relocate  (point of no return)
//! post_move ◄─ on_entity_arrived ◄─ announce_arrival ◄─┘
//! ```
//!
//! A failure before relocation leaves everything as it was: a location
//! materialized for the move is unregistered and pooled again, a re-keyed
//! one is bound back to its old coordinate. A failure after relocation is
//! reported with `committed: true`; the entity stays at the target and an
//! emptied old location is still evicted.

use tracing::{debug, warn};
use wildmap_core::{
    Coord, Direction, EntityId, HookError, HookStage, LastKnown, MoveError, MoveOptions, RoomRef,
    Traveler, WorldError,
};

use crate::room::Location;
use crate::world::{Materialized, WorldEngine};

/// Which path a successful move took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePath {
    /// Moved to nowhere.
    Detached,
    /// Joined the location already active at the target.
    Merged,
    /// Re-keyed the entity's own location to the target.
    ReusedInPlace,
    /// Took a location from the pool.
    Recycled,
    /// Created a new location.
    Allocated,
}

/// Outcome of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Where the entity is now.
    pub room: Option<RoomRef>,
    /// How it got there.
    pub path: MovePath,
    /// The old location, if it was evicted by this move.
    pub evicted: Option<RoomRef>,
}

/// A materialization that can still be undone.
enum Staged {
    Reused {
        room: RoomRef,
        registered_at: Option<Coord>,
        coordinates: Option<Coord>,
        title: String,
        description: String,
    },
    Fresh {
        room: RoomRef,
        how: Materialized,
    },
}

impl Staged {
    fn room(&self) -> RoomRef {
        match self {
            Self::Reused { room, .. } | Self::Fresh { room, .. } => *room,
        }
    }

    fn path(&self) -> MovePath {
        match self {
            Self::Reused { .. } => MovePath::ReusedInPlace,
            Self::Fresh {
                how: Materialized::Recycled,
                ..
            } => MovePath::Recycled,
            Self::Fresh {
                how: Materialized::Allocated,
                ..
            } => MovePath::Allocated,
        }
    }
}

impl WorldEngine {
    // ── Public surface ─────────────────────────────────────────────

    /// Move `entity` to `target`, or to nowhere when `target` is `None`
    /// and `options.to_none` is set.
    ///
    /// On `Ok` with a target, `get_room(target) == entity.location()` and
    /// `entity.coordinates() == Some(target)`.
    pub fn move_entity(
        &mut self,
        entity: &mut dyn Traveler,
        target: Option<Coord>,
        options: &MoveOptions,
    ) -> Result<MoveReport, MoveError> {
        let result = self.dispatch_move(entity, target, options);
        match &result {
            Ok(_) => self.metrics.moves += 1,
            Err(e) => {
                self.metrics.rejected_moves += 1;
                debug!(entity = %entity.entity_id(), err = %e, "move rejected");
            }
        }
        result
    }

    /// Move `entity` one step through the exit called `key` (`nord`, `n`, ...).
    ///
    /// The step is taken from the current location's coordinate. A locked
    /// or hidden exit is out of bounds; a location without that exit does
    /// not know the direction.
    pub fn traverse(
        &mut self,
        entity: &mut dyn Traveler,
        key: &str,
        options: &MoveOptions,
    ) -> Result<MoveReport, MoveError> {
        let direction = Direction::parse(key)?;
        let room = self
            .current_location(entity)
            .ok_or(MoveError::NoDestination)?;
        let origin = self
            .state
            .rooms
            .get(room)
            .and_then(Location::coordinates)
            .or_else(|| entity.coordinates())
            .ok_or(MoveError::NoDestination)?;
        let target = origin.step(direction);

        match self.exit_towards(room, direction) {
            None => {
                return Err(MoveError::UnknownDirection {
                    key: key.to_string(),
                })
            }
            Some((_, exit)) if !exit.is_traversable() || !exit.is_visible() => {
                return Err(MoveError::OutOfBounds {
                    coord: target.unwrap_or(origin),
                })
            }
            Some(_) => {}
        }
        let target = target.ok_or(MoveError::OutOfBounds { coord: origin })?;
        self.move_entity(entity, Some(target), options)
    }

    /// Record where `entity` is and take it out of the world (logout).
    ///
    /// Returns the location it was taken from.
    pub fn stow(&mut self, entity: &mut dyn Traveler) -> Option<RoomRef> {
        if let Some(room) = self.current_location(entity) {
            self.remember_position(entity, room);
        }
        let old = self.detach(entity);
        if let Some(room) = old {
            debug!(entity = %entity.entity_id(), %room, "entity stowed");
        }
        old
    }

    /// Put a stowed entity back (login).
    ///
    /// An entity that still has a location stays put. Otherwise it is
    /// relocated quietly, without hooks, to its last-known coordinate when
    /// that was in the wild or is still registered. Failing that it is
    /// placed in `home` and `home`'s [`RoomHooks::on_entity_arrived`] runs
    /// with no source, since nothing else announces the login there; the
    /// entity's own hooks do not run. Returns where the entity ended up.
    ///
    /// [`RoomHooks::on_entity_arrived`]: wildmap_core::RoomHooks::on_entity_arrived
    pub fn restore(
        &mut self,
        entity: &mut dyn Traveler,
        home: Option<RoomRef>,
    ) -> Result<Option<RoomRef>, MoveError> {
        if let Some(room) = self.current_location(entity) {
            self.remember_position(entity, room);
            return Ok(Some(room));
        }

        if let Some(last) = entity.last_known() {
            if last.area == self.wild_area || self.state.registry.contains(last.coordinates) {
                match self.move_entity(
                    entity,
                    Some(last.coordinates),
                    &MoveOptions::relocation(),
                ) {
                    Ok(report) => return Ok(report.room),
                    Err(e) => warn!(
                        entity = %entity.entity_id(),
                        x = last.coordinates.x,
                        y = last.coordinates.y,
                        err = %e,
                        "restore to last position failed"
                    ),
                }
            }
        }

        let Some(home) = home.filter(|h| self.state.rooms.contains(*h)) else {
            return Ok(None);
        };
        let id = entity.entity_id();
        let coordinates = self.state.rooms.get(home).and_then(Location::coordinates);
        if let Some(loc) = self.state.rooms.get_mut(home) {
            loc.admit(id);
        }
        entity.set_location(Some(home));
        entity.set_coordinates(coordinates);
        debug!(entity = %id, room = %home, "entity restored home");
        if let Err(e) = self.hooks.on_entity_arrived(home, id, None) {
            return Err(self.hook_failed(HookStage::Arrived, id, e));
        }
        Ok(Some(home))
    }

    // ── Dispatch ───────────────────────────────────────────────────

    fn dispatch_move(
        &mut self,
        entity: &mut dyn Traveler,
        target: Option<Coord>,
        options: &MoveOptions,
    ) -> Result<MoveReport, MoveError> {
        let Some(target) = target else {
            if !options.to_none {
                return Err(MoveError::NoDestination);
            }
            self.detach(entity);
            return Ok(MoveReport {
                room: None,
                path: MovePath::Detached,
                evicted: None,
            });
        };
        if !self.is_valid(target) {
            return Err(MoveError::OutOfBounds { coord: target });
        }
        match self.state.registry.get(target) {
            Some(room) => self.merge_into(entity, target, room, options),
            None => self.materialize_into(entity, target, options),
        }
    }

    fn merge_into(
        &mut self,
        entity: &mut dyn Traveler,
        target: Coord,
        room: RoomRef,
        options: &MoveOptions,
    ) -> Result<MoveReport, MoveError> {
        let old = self.current_location(entity);
        if old == Some(room) {
            return Err(MoveError::AlreadyThere);
        }
        if options.run_hooks {
            self.ask_pre_move(entity, Some(room), Some(target))?;
        }
        if let Some(old) = old {
            self.depart(entity, old, room, options)?;
        }

        self.relocate(entity, old, room, target);
        self.metrics.merges += 1;
        if let Some(Location::Static(portal)) = self.state.rooms.get(room) {
            entity.set_last_known(LastKnown {
                coordinates: target,
                area: portal.area.clone(),
            });
        }
        debug!(
            entity = %entity.entity_id(),
            x = target.x,
            y = target.y,
            %room,
            "merged into active location"
        );

        let arrival = self.finish_arrival(entity, old, room, options);
        let evicted = self.evict_if_idle(old)?;
        arrival?;
        Ok(MoveReport {
            room: Some(room),
            path: MovePath::Merged,
            evicted,
        })
    }

    fn materialize_into(
        &mut self,
        entity: &mut dyn Traveler,
        target: Coord,
        options: &MoveOptions,
    ) -> Result<MoveReport, MoveError> {
        if options.run_hooks {
            self.ask_pre_move(entity, None, Some(target))?;
        }
        let id = entity.entity_id();
        let old = self.current_location(entity);

        let staged = match old.filter(|o| self.is_poolable(*o, Some(id))) {
            Some(own) => self.rekey(own, target)?,
            None => {
                let (room, how) = self.materialize(target)?;
                Staged::Fresh { room, how }
            }
        };
        let room = staged.room();
        let path = staged.path();

        if let Err(e) = self.apply_terrain_content(room, target) {
            self.rollback(staged, target);
            return Err(e.into());
        }
        if path != MovePath::ReusedInPlace {
            if let Some(old) = old {
                if let Err(e) = self.depart(entity, old, room, options) {
                    self.rollback(staged, target);
                    return Err(e);
                }
            }
        } else {
            self.metrics.reused_in_place += 1;
        }

        self.relocate(entity, old, room, target);
        debug!(
            entity = %id,
            x = target.x,
            y = target.y,
            %room,
            path = ?path,
            "materialized for move"
        );

        self.finish_arrival(entity, old, room, options)?;
        Ok(MoveReport {
            room: Some(room),
            path,
            evicted: None,
        })
    }

    // ── Staging ────────────────────────────────────────────────────

    /// Move `room`'s registry binding to `target` and refresh its locks.
    fn rekey(&mut self, room: RoomRef, target: Coord) -> Result<Staged, WorldError> {
        let loc = self.state.rooms.get(room).ok_or(WorldError::StaleHandle)?;
        let coordinates = loc.coordinates();
        let title = loc.title().to_string();
        let description = loc.description().to_string();
        let registered_at = coordinates.filter(|c| self.state.registry.get(*c) == Some(room));

        if let Some(previous) = registered_at {
            self.state.registry.remove(previous);
        }
        self.state.registry.put(target, room);
        if let Some(loc) = self.state.rooms.get_mut(room) {
            loc.set_coordinates(Some(target));
        }
        self.refresh_exit_locks(room);
        Ok(Staged::Reused {
            room,
            registered_at,
            coordinates,
            title,
            description,
        })
    }

    /// Undo a staged materialization.
    fn rollback(&mut self, staged: Staged, target: Coord) {
        self.metrics.rollbacks += 1;
        let room = staged.room();
        if self.state.registry.get(target) == Some(room) {
            self.state.registry.remove(target);
        }
        match staged {
            Staged::Reused {
                room,
                registered_at,
                coordinates,
                title,
                description,
            } => {
                if let Some(loc) = self.state.rooms.get_mut(room) {
                    loc.set_content(title, description);
                    loc.set_coordinates(coordinates);
                }
                if let Some(previous) = registered_at {
                    self.state.registry.put(previous, room);
                }
                self.refresh_exit_locks(room);
            }
            Staged::Fresh { room, .. } => {
                if let Err(e) = self.retire(room) {
                    warn!(%room, err = %e, "could not pool rolled-back location");
                }
            }
        }
        warn!(x = target.x, y = target.y, %room, "materialization rolled back");
    }

    // ── Steps ──────────────────────────────────────────────────────

    /// The entity's location if its handle still resolves.
    fn current_location(&self, entity: &dyn Traveler) -> Option<RoomRef> {
        let room = entity.location()?;
        if self.state.rooms.contains(room) {
            Some(room)
        } else {
            warn!(entity = %entity.entity_id(), %room, "ignoring stale location handle");
            None
        }
    }

    fn ask_pre_move(
        &mut self,
        entity: &mut dyn Traveler,
        destination: Option<RoomRef>,
        target: Option<Coord>,
    ) -> Result<(), MoveError> {
        match entity.pre_move(destination, target) {
            Ok(true) => Ok(()),
            Ok(false) => Err(MoveError::VetoedMove),
            Err(e) => Err(self.hook_failed(HookStage::PreMove, entity.entity_id(), e)),
        }
    }

    fn depart(
        &mut self,
        entity: &mut dyn Traveler,
        old: RoomRef,
        destination: RoomRef,
        options: &MoveOptions,
    ) -> Result<(), MoveError> {
        let id = entity.entity_id();
        if options.run_hooks {
            if let Err(e) = self.hooks.on_entity_leaving(old, id, destination) {
                return Err(self.hook_failed(HookStage::Leaving, id, e));
            }
        }
        if !options.quiet {
            if let Err(e) = entity.announce_departure(destination, options) {
                return Err(self.hook_failed(HookStage::Departure, id, e));
            }
        }
        Ok(())
    }

    fn relocate(
        &mut self,
        entity: &mut dyn Traveler,
        old: Option<RoomRef>,
        room: RoomRef,
        target: Coord,
    ) {
        let id = entity.entity_id();
        if let Some(old) = old.filter(|o| *o != room) {
            if let Some(loc) = self.state.rooms.get_mut(old) {
                loc.expel(id);
            }
        }
        if let Some(loc) = self.state.rooms.get_mut(room) {
            loc.admit(id);
        }
        entity.set_location(Some(room));
        entity.set_coordinates(Some(target));
    }

    fn finish_arrival(
        &mut self,
        entity: &mut dyn Traveler,
        old: Option<RoomRef>,
        room: RoomRef,
        options: &MoveOptions,
    ) -> Result<(), MoveError> {
        let id = entity.entity_id();
        if !options.quiet {
            if let Err(e) = entity.announce_arrival(old, options) {
                return Err(self.hook_failed(HookStage::Arrival, id, e));
            }
        }
        if options.run_hooks {
            if let Err(e) = self.hooks.on_entity_arrived(room, id, old) {
                return Err(self.hook_failed(HookStage::Arrived, id, e));
            }
            if let Err(e) = entity.post_move(old) {
                return Err(self.hook_failed(HookStage::PostMove, id, e));
            }
        }
        Ok(())
    }

    fn evict_if_idle(&mut self, old: Option<RoomRef>) -> Result<Option<RoomRef>, WorldError> {
        match old {
            Some(old) if self.is_poolable(old, None) => {
                self.dispose(old)?;
                Ok(Some(old))
            }
            _ => Ok(None),
        }
    }

    fn detach(&mut self, entity: &mut dyn Traveler) -> Option<RoomRef> {
        let old = self.current_location(entity);
        if let Some(room) = old {
            if let Some(loc) = self.state.rooms.get_mut(room) {
                loc.expel(entity.entity_id());
            }
        }
        entity.set_location(None);
        entity.set_coordinates(None);
        old
    }

    fn remember_position(&mut self, entity: &mut dyn Traveler, room: RoomRef) {
        let Some(loc) = self.state.rooms.get(room) else {
            return;
        };
        if let Some(coordinates) = loc.coordinates() {
            entity.set_last_known(LastKnown {
                coordinates,
                area: loc.area(&self.wild_area).to_string(),
            });
        }
    }

    fn hook_failed(
        &mut self,
        stage: HookStage,
        entity: EntityId,
        err: HookError,
    ) -> MoveError {
        let committed = stage.is_after_commit();
        self.metrics.hook_failures += 1;
        warn!(%entity, %stage, reason = %err.reason, committed, "move hook failed");
        MoveError::HookFailure {
            stage,
            reason: err.reason,
            committed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::room::StaticRoom;

    struct Walker {
        id: EntityId,
        location: Option<RoomRef>,
        coordinates: Option<Coord>,
        last: Option<LastKnown>,
    }

    impl Walker {
        fn new(id: u64) -> Self {
            Self {
                id: EntityId(id),
                location: None,
                coordinates: None,
                last: None,
            }
        }
    }

    impl Traveler for Walker {
        fn entity_id(&self) -> EntityId {
            self.id
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
        fn last_known(&self) -> Option<LastKnown> {
            self.last.clone()
        }
        fn set_last_known(&mut self, last: LastKnown) {
            self.last = Some(last);
        }
    }

    /// 5x5 of plains.
    fn engine() -> WorldEngine {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&5u32.to_le_bytes());
        bytes.extend_from_slice(&5u32.to_le_bytes());
        bytes.extend_from_slice(&[1u8; 25]);
        WorldEngine::from_bytes(&bytes, WorldConfig::default()).unwrap()
    }

    fn go(e: &mut WorldEngine, w: &mut Walker, x: i32, y: i32) -> Result<MoveReport, MoveError> {
        e.move_entity(w, Some(Coord::new(x, y)), &MoveOptions::default())
    }

    #[test]
    fn first_move_allocates() {
        let mut e = engine();
        let mut w = Walker::new(1);
        let report = go(&mut e, &mut w, 2, 2).unwrap();
        assert_eq!(report.path, MovePath::Allocated);
        assert_eq!(e.get_room(Coord::new(2, 2)), w.location);
        assert_eq!(w.coordinates, Some(Coord::new(2, 2)));
        assert_eq!(e.room(report.room.unwrap()).unwrap().title(), "Pianura");
    }

    #[test]
    fn lone_walker_reuses_in_place() {
        let mut e = engine();
        let mut w = Walker::new(1);
        let first = go(&mut e, &mut w, 2, 2).unwrap().room;
        let report = go(&mut e, &mut w, 3, 2).unwrap();
        assert_eq!(report.path, MovePath::ReusedInPlace);
        assert_eq!(report.room, first);
        assert!(e.get_room(Coord::new(2, 2)).is_none());
        assert_eq!(e.metrics().room_pool_misses, 1);
        e.verify_invariants().unwrap();
    }

    #[test]
    fn leaving_a_shared_room_draws_a_new_one() {
        let mut e = engine();
        let mut a = Walker::new(1);
        let mut b = Walker::new(2);
        go(&mut e, &mut a, 1, 1).unwrap();
        assert_eq!(go(&mut e, &mut b, 1, 1).unwrap().path, MovePath::Merged);
        let report = go(&mut e, &mut a, 1, 2).unwrap();
        assert_eq!(report.path, MovePath::Allocated);
        assert!(e.get_room(Coord::new(1, 1)).is_some());
        assert_eq!(e.metrics().evictions, 0);
        e.verify_invariants().unwrap();
    }

    #[test]
    fn merge_evicts_emptied_room_and_next_materialize_recycles_it() {
        let mut e = engine();
        let mut a = Walker::new(1);
        let mut b = Walker::new(2);
        go(&mut e, &mut a, 0, 0).unwrap();
        let old = go(&mut e, &mut b, 4, 4).unwrap().room;
        let report = go(&mut e, &mut b, 0, 0).unwrap();
        assert_eq!(report.path, MovePath::Merged);
        assert_eq!(report.evicted, old);
        assert!(e.get_room(Coord::new(4, 4)).is_none());

        let mut c = Walker::new(3);
        let fresh = go(&mut e, &mut c, 3, 3).unwrap();
        assert_eq!(fresh.path, MovePath::Recycled);
        assert_eq!(fresh.room.map(|r| r.index), old.map(|r| r.index));
        e.verify_invariants().unwrap();
    }

    #[test]
    fn already_there_and_no_destination() {
        let mut e = engine();
        let mut w = Walker::new(1);
        go(&mut e, &mut w, 1, 1).unwrap();
        assert_eq!(go(&mut e, &mut w, 1, 1), Err(MoveError::AlreadyThere));
        assert_eq!(
            e.move_entity(&mut w, None, &MoveOptions::default()),
            Err(MoveError::NoDestination)
        );
        assert_eq!(e.metrics().rejected_moves, 2);
    }

    #[test]
    fn to_none_detaches_without_eviction() {
        let mut e = engine();
        let mut w = Walker::new(1);
        let room = go(&mut e, &mut w, 1, 1).unwrap().room.unwrap();
        let report = e
            .move_entity(&mut w, None, &MoveOptions::default().to_none(true))
            .unwrap();
        assert_eq!(report.path, MovePath::Detached);
        assert!(w.location.is_none());
        assert!(e.room(room).unwrap().occupants().is_empty());
        assert_eq!(e.get_room(Coord::new(1, 1)), Some(room));
        assert_eq!(e.sweep().evicted, 1);
    }

    #[test]
    fn merge_into_static_portal_records_last_known() {
        let mut e = engine();
        let c = Coord::new(2, 3);
        e.register_static_portal(c, StaticRoom::new("grotta", "Grotta", "Buia.", "grotte"))
            .unwrap();
        let mut w = Walker::new(1);
        assert_eq!(go(&mut e, &mut w, 2, 3).unwrap().path, MovePath::Merged);
        assert_eq!(
            w.last,
            Some(LastKnown {
                coordinates: c,
                area: "grotte".to_string()
            })
        );
    }

    #[test]
    fn traverse_follows_directions() {
        let mut e = engine();
        let mut w = Walker::new(1);
        go(&mut e, &mut w, 0, 0).unwrap();
        let opts = MoveOptions::default();
        e.traverse(&mut w, "n", &opts).unwrap();
        assert_eq!(w.coordinates, Some(Coord::new(0, 1)));
        e.traverse(&mut w, "est", &opts).unwrap();
        assert_eq!(w.coordinates, Some(Coord::new(1, 1)));
        assert!(matches!(
            e.traverse(&mut w, "su", &opts),
            Err(MoveError::UnknownDirection { .. })
        ));
    }

    #[test]
    fn traverse_through_locked_exit_is_out_of_bounds() {
        let mut e = engine();
        let mut w = Walker::new(1);
        go(&mut e, &mut w, 0, 0).unwrap();
        assert_eq!(
            e.traverse(&mut w, "ovest", &MoveOptions::default()),
            Err(MoveError::OutOfBounds {
                coord: Coord::new(-1, 0)
            })
        );
        assert_eq!(w.coordinates, Some(Coord::new(0, 0)));
    }

    #[test]
    fn traverse_through_hidden_exit_is_out_of_bounds() {
        let mut e = engine();
        let mut w = Walker::new(1);
        let room = go(&mut e, &mut w, 2, 2).unwrap().room.unwrap();
        let (north, _) = e.exit_towards(room, Direction::Nord).unwrap();
        e.state.exits.get_mut(north).unwrap().set_visible(false);
        assert_eq!(
            e.traverse(&mut w, "nord", &MoveOptions::default()),
            Err(MoveError::OutOfBounds {
                coord: Coord::new(2, 3)
            })
        );
        assert_eq!(w.coordinates, Some(Coord::new(2, 2)));
        e.traverse(&mut w, "est", &MoveOptions::default()).unwrap();
    }

    #[test]
    fn traverse_from_static_room_needs_the_exit() {
        let mut e = engine();
        let portal = e.create_static_room(Coord::new(2, 2), Some("torri"), None).unwrap();
        let mut w = Walker::new(1);
        go(&mut e, &mut w, 2, 2).unwrap();
        assert!(matches!(
            e.traverse(&mut w, "sud", &MoveOptions::default()),
            Err(MoveError::UnknownDirection { .. })
        ));
        e.attach_exit(portal, "sud").unwrap();
        e.traverse(&mut w, "s", &MoveOptions::default()).unwrap();
        assert_eq!(w.coordinates, Some(Coord::new(2, 1)));
        assert_eq!(e.room(portal).unwrap().occupants(), &[] as &[EntityId]);
    }

    #[test]
    fn stow_and_restore_in_the_wild() {
        let mut e = engine();
        let mut w = Walker::new(1);
        go(&mut e, &mut w, 3, 1).unwrap();
        e.stow(&mut w);
        assert!(w.location.is_none());
        assert_eq!(w.last.as_ref().unwrap().area, "wild");
        e.sweep();
        assert!(e.get_room(Coord::new(3, 1)).is_none());

        let room = e.restore(&mut w, None).unwrap();
        assert_eq!(room, e.get_room(Coord::new(3, 1)));
        assert_eq!(w.coordinates, Some(Coord::new(3, 1)));
    }

    #[test]
    fn restore_falls_back_home() {
        let mut e = engine();
        let home = e.create_static_room(Coord::new(0, 4), Some("casa"), None).unwrap();
        e.unregister(Coord::new(0, 4)).unwrap();
        let mut w = Walker::new(1);
        w.last = Some(LastKnown {
            coordinates: Coord::new(1, 1),
            area: "dungeon".to_string(),
        });
        assert_eq!(e.restore(&mut w, Some(home)), Ok(Some(home)));
        assert_eq!(w.location, Some(home));
        assert!(e.room(home).unwrap().contains(EntityId(1)));
    }

    #[test]
    fn stale_location_is_treated_as_nowhere() {
        let mut e = engine();
        let mut w = Walker::new(1);
        w.location = Some(RoomRef {
            index: 40,
            generation: 3,
        });
        let report = go(&mut e, &mut w, 1, 1).unwrap();
        assert_eq!(report.path, MovePath::Allocated);
    }
}
