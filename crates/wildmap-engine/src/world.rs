//! The world engine: terrain, registry, pools and location lifecycle.
//!
//! [`WorldEngine`] exclusively owns the [`RoomRegistry`](crate::RoomRegistry)
//! and both pools. Every operation runs to completion under `&mut self`;
//! callers that share an engine wrap the whole engine in one lock (see
//! [`global`](crate::global)).
//!
//! Movement lives in [`movement`](crate::movement) as a second
//! `impl WorldEngine` block.

use std::collections::HashSet;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};
use wildmap_core::{
    Coord, Direction, EntityId, ExitRef, NoopRoomHooks, RoomHooks, RoomRef, WorldError,
};
use wildmap_terrain::{TerrainCatalog, TerrainGrid};

use crate::config::{ConfigError, WorldConfig};
use crate::exit::{Exit, ExitKey};
use crate::metrics::EngineMetrics;
use crate::room::{DynamicRoom, ExitList, Location, StaticRoom, EMPTY_ROOM_DESCRIPTION};
use crate::store::WorldState;

/// Outcome of a maintenance sweep over the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Entries dropped because their location handle no longer resolves.
    pub stale: usize,
    /// Idle dynamic locations returned to the pool.
    pub evicted: usize,
    /// Occupied dynamic locations whose terrain content was re-applied.
    pub refreshed: usize,
}

/// How [`WorldEngine::materialize`] obtained its location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Materialized {
    /// Popped from the room pool.
    Recycled,
    /// Created because the pool was empty.
    Allocated,
}

/// The sparse wilderness engine.
///
/// Only coordinates that something currently occupies have a location;
/// everything else exists only as a terrain byte.
pub struct WorldEngine {
    pub(crate) terrain: TerrainGrid,
    pub(crate) catalog: TerrainCatalog,
    pub(crate) wild_area: String,
    pub(crate) state: WorldState,
    pub(crate) hooks: Box<dyn RoomHooks>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) metrics: EngineMetrics,
}

// Compile-time assertion: the engine must be Send to live behind the
// process-wide lock.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<WorldEngine>();
    }
};

impl fmt::Debug for WorldEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldEngine")
            .field("width", &self.terrain.width())
            .field("height", &self.terrain.height())
            .field("wild_area", &self.wild_area)
            .field("active", &self.state.registry.len())
            .field("pooled_rooms", &self.state.rooms.pooled_count())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl WorldEngine {
    // ── Construction ───────────────────────────────────────────────

    /// Build an engine with empty registry and pools.
    pub fn new(terrain: TerrainGrid, config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate_grid(&terrain)?;
        let state = WorldState::with_capacity(config.room_capacity_hint);
        let engine = Self::assemble(terrain, config, state);
        info!(
            width = engine.terrain.width(),
            height = engine.terrain.height(),
            kinds = engine.catalog.len(),
            "world engine created"
        );
        Ok(engine)
    }

    /// Parse a terrain file and build an engine from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmap_core::Coord;
    /// use wildmap_engine::{WorldConfig, WorldEngine};
    ///
    /// let mut bytes = vec![2, 0, 0, 0, 2, 0, 0, 0];
    /// bytes.extend_from_slice(&[0, 1, 2, 3]);
    /// let engine = WorldEngine::from_bytes(&bytes, WorldConfig::default()).unwrap();
    /// assert!(engine.is_valid(Coord::new(1, 1)));
    /// assert!(engine.get_room(Coord::new(1, 1)).is_none());
    /// ```
    pub fn from_bytes(bytes: &[u8], config: WorldConfig) -> Result<Self, ConfigError> {
        Self::new(TerrainGrid::load(bytes)?, config)
    }

    /// Rebuild an engine around a persisted state.
    ///
    /// Runs the reattach sweep: stale registry entries are dropped, idle
    /// dynamic locations go back to the pool, and occupied ones get fresh
    /// terrain content.
    pub fn attach(
        terrain: TerrainGrid,
        config: WorldConfig,
        state: WorldState,
    ) -> Result<Self, ConfigError> {
        config.validate_grid(&terrain)?;
        let mut engine = Self::assemble(terrain, config, state);
        let report = engine.sweep_registry(true);
        info!(
            active = engine.state.registry.len(),
            stale = report.stale,
            evicted = report.evicted,
            refreshed = report.refreshed,
            "world engine reattached"
        );
        Ok(engine)
    }

    fn assemble(terrain: TerrainGrid, config: WorldConfig, state: WorldState) -> Self {
        Self {
            terrain,
            catalog: config.catalog,
            wild_area: config.wild_area,
            state,
            hooks: Box::new(NoopRoomHooks),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            metrics: EngineMetrics::default(),
        }
    }

    /// Replace the location-side hooks.
    pub fn set_room_hooks(&mut self, hooks: Box<dyn RoomHooks>) {
        self.hooks = hooks;
    }

    /// The persisted part of the engine.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Tear the engine down, keeping only what is persisted.
    pub fn into_state(self) -> WorldState {
        self.state
    }

    // ── Lookup ─────────────────────────────────────────────────────

    /// The terrain grid.
    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    /// The terrain catalog.
    pub fn catalog(&self) -> &TerrainCatalog {
        &self.catalog
    }

    /// Area tag of dynamic locations.
    pub fn wild_area(&self) -> &str {
        &self.wild_area
    }

    /// Counters since construction.
    pub fn metrics(&self) -> EngineMetrics {
        self.metrics
    }

    /// Whether `coord` is on the terrain grid.
    pub fn is_valid(&self, coord: Coord) -> bool {
        self.terrain.is_valid(coord)
    }

    /// The active location at `coord`.
    pub fn get_room(&self, coord: Coord) -> Option<RoomRef> {
        self.state.registry.get(coord)
    }

    /// Borrow a live location.
    pub fn room(&self, room: RoomRef) -> Option<&Location> {
        self.state.rooms.get(room)
    }

    /// Borrow a live exit.
    pub fn exit(&self, exit: ExitRef) -> Option<&Exit> {
        self.state.exits.get(exit)
    }

    /// The exit of `room` facing `direction`.
    pub fn exit_towards(&self, room: RoomRef, direction: Direction) -> Option<(ExitRef, &Exit)> {
        let loc = self.state.rooms.get(room)?;
        loc.exits().iter().find_map(|&handle| {
            let exit = self.state.exits.get(handle)?;
            (exit.key().direction() == Some(direction)).then_some((handle, exit))
        })
    }

    /// Whether `room` is a dynamic location holding nothing besides
    /// `exclude`.
    pub fn is_poolable(&self, room: RoomRef, exclude: Option<EntityId>) -> bool {
        self.state
            .rooms
            .get(room)
            .is_some_and(|loc| loc.is_poolable(exclude))
    }

    // ── Static portals ─────────────────────────────────────────────

    /// Store a hand-authored location and bind it at `coord`.
    pub fn register_static_portal(
        &mut self,
        coord: Coord,
        room: StaticRoom,
    ) -> Result<RoomRef, WorldError> {
        self.check_vacant(coord)?;
        let key = room.key.clone();
        let handle = self.state.rooms.allocate(Location::Static(room))?;
        self.bind_static(coord, handle)?;
        info!(x = coord.x, y = coord.y, room = %handle, key = %key, "static portal registered");
        Ok(handle)
    }

    /// Bind an already-stored static location at `coord`, e.g. after
    /// [`unregister`](Self::unregister).
    ///
    /// A location still registered at its recorded coordinate is refused
    /// with [`WorldError::AlreadyOccupied`] naming that coordinate; call
    /// [`unregister`](Self::unregister) first to move it.
    pub fn rebind_static_portal(&mut self, coord: Coord, room: RoomRef) -> Result<(), WorldError> {
        self.check_vacant(coord)?;
        let current = self
            .state
            .rooms
            .get(room)
            .ok_or(WorldError::StaleHandle)?
            .coordinates();
        if let Some(current) = current.filter(|c| self.state.registry.get(*c) == Some(room)) {
            return Err(WorldError::AlreadyOccupied { coord: current });
        }
        self.bind_static(coord, room)?;
        debug!(x = coord.x, y = coord.y, %room, "static portal rebound");
        Ok(())
    }

    /// Create a static location at `coord`.
    ///
    /// `key` defaults to `wild_<x>_<y>` and doubles as the title; `area`
    /// defaults to the wild area.
    pub fn create_static_room(
        &mut self,
        coord: Coord,
        area: Option<&str>,
        key: Option<&str>,
    ) -> Result<RoomRef, WorldError> {
        let key = key
            .map(str::to_string)
            .unwrap_or_else(|| format!("wild_{}_{}", coord.x, coord.y));
        let area = area.unwrap_or(&self.wild_area).to_string();
        let room = StaticRoom::new(key.clone(), key, EMPTY_ROOM_DESCRIPTION, area);
        self.register_static_portal(coord, room)
    }

    /// Remove the registry entry of a static location without pooling it.
    ///
    /// The location stays stored and keeps its occupants. Dynamic
    /// locations must go through [`delete`](Self::delete).
    pub fn unregister(&mut self, coord: Coord) -> Result<Option<RoomRef>, WorldError> {
        let Some(room) = self.state.registry.get(coord) else {
            return Ok(None);
        };
        if self.state.rooms.get(room).is_some_and(|loc| !loc.is_static()) {
            return Err(WorldError::InvariantViolation {
                detail: format!("dynamic location at {coord} is deleted, not unregistered"),
            });
        }
        self.state.registry.remove(coord);
        debug!(x = coord.x, y = coord.y, %room, "static portal unregistered");
        Ok(Some(room))
    }

    fn check_vacant(&self, coord: Coord) -> Result<(), WorldError> {
        if !self.is_valid(coord) {
            return Err(WorldError::OutOfBounds { coord });
        }
        if self.state.registry.contains(coord) {
            return Err(WorldError::AlreadyOccupied { coord });
        }
        Ok(())
    }

    fn bind_static(&mut self, coord: Coord, room: RoomRef) -> Result<(), WorldError> {
        let loc = self
            .state
            .rooms
            .get_mut(room)
            .ok_or(WorldError::StaleHandle)?;
        if !loc.is_static() {
            return Err(WorldError::InvariantViolation {
                detail: format!("{room} is dynamic and cannot be bound by hand"),
            });
        }
        loc.set_coordinates(Some(coord));
        self.state.registry.put(coord, room);
        self.refresh_exit_locks(room);
        Ok(())
    }

    // ── Content ────────────────────────────────────────────────────

    /// Give `room` the title and a random description of the terrain at
    /// `coord`, and record `coord` on it.
    pub fn apply_terrain_content(&mut self, room: RoomRef, coord: Coord) -> Result<(), WorldError> {
        let kind = self
            .terrain
            .terrain_at(coord)
            .map_err(|_| WorldError::OutOfBounds { coord })?;
        let entry = self
            .catalog
            .entry(kind)
            .ok_or_else(|| WorldError::InvariantViolation {
                detail: format!("terrain kind {kind} at {coord} has no catalog entry"),
            })?;
        if entry.descriptions.is_empty() {
            return Err(WorldError::InvariantViolation {
                detail: format!("terrain kind {kind} has no descriptions"),
            });
        }
        let pick = self.rng.gen_range(0..entry.descriptions.len());
        let title = entry.title.clone();
        let description = entry.descriptions[pick].clone();

        let loc = self
            .state
            .rooms
            .get_mut(room)
            .ok_or(WorldError::StaleHandle)?;
        loc.set_content(title, description);
        loc.set_coordinates(Some(coord));
        trace!(x = coord.x, y = coord.y, %room, %kind, "terrain content applied");
        Ok(())
    }

    /// Lock or unlock each cardinal exit of `room` by whether its grid
    /// neighbour exists. Named exits are left alone.
    pub(crate) fn refresh_exit_locks(&mut self, room: RoomRef) {
        let Some(loc) = self.state.rooms.get(room) else {
            return;
        };
        let coord = loc.coordinates();
        for &handle in loc.exits() {
            let Some(exit) = self.state.exits.get_mut(handle) else {
                continue;
            };
            if let Some(direction) = exit.key().direction() {
                let open = coord
                    .and_then(|c| c.step(direction))
                    .is_some_and(|n| self.terrain.is_valid(n));
                exit.set_open(open);
            }
        }
    }

    // ── Exits ──────────────────────────────────────────────────────

    /// Attach an extra exit called `name` to `room`.
    ///
    /// Named exits are open. A cardinal key may be attached once to a
    /// static location and is locked by its grid neighbour; dynamic
    /// locations own their cardinal exits.
    pub fn attach_exit(&mut self, room: RoomRef, name: &str) -> Result<ExitRef, WorldError> {
        let loc = self.state.rooms.get(room).ok_or(WorldError::StaleHandle)?;
        let key = ExitKey::from_name(name);
        let taken = loc
            .exits()
            .iter()
            .filter_map(|&e| self.state.exits.get(e))
            .any(|e| e.key() == &key);
        if taken || (key.direction().is_some() && !loc.is_static()) {
            return Err(WorldError::ReservedExitKey {
                key: name.to_string(),
            });
        }

        let handle = self.obtain_exit(key.clone(), room)?;
        if let Some(loc) = self.state.rooms.get_mut(room) {
            loc.exits_mut().push(handle);
        }
        if key.direction().is_some() {
            self.refresh_exit_locks(room);
        } else if let Some(exit) = self.state.exits.get_mut(handle) {
            exit.set_open(true);
        }
        debug!(%room, exit = %handle, key = %key, "exit attached");
        Ok(handle)
    }

    /// Pull an exit from the garage, or create one, and point it at `room`.
    fn obtain_exit(&mut self, key: ExitKey, room: RoomRef) -> Result<ExitRef, WorldError> {
        let handle = match self.state.exits.acquire_exit(key.clone()) {
            Some(handle) => {
                self.metrics.exit_pool_hits += 1;
                handle
            }
            None => {
                self.metrics.exit_pool_misses += 1;
                self.state.exits.allocate(Exit::new(key))?
            }
        };
        if let Some(exit) = self.state.exits.get_mut(handle) {
            exit.wire(room, room);
        }
        Ok(handle)
    }

    // ── Objects ────────────────────────────────────────────────────

    /// Record a non-travelling object inside `room`.
    pub fn place(&mut self, room: RoomRef, object: EntityId) -> Result<(), WorldError> {
        self.state
            .rooms
            .get_mut(room)
            .ok_or(WorldError::StaleHandle)?
            .admit(object);
        trace!(%room, %object, "object placed");
        Ok(())
    }

    /// Take an object out of `room`. Returns whether it was there.
    ///
    /// An emptied dynamic location is not evicted here; the next
    /// [`sweep`](Self::sweep) collects it.
    pub fn withdraw(&mut self, room: RoomRef, object: EntityId) -> Result<bool, WorldError> {
        let removed = self
            .state
            .rooms
            .get_mut(room)
            .ok_or(WorldError::StaleHandle)?
            .expel(object);
        trace!(%room, %object, removed, "object withdrawn");
        Ok(removed)
    }

    // ── Lifecycle ──────────────────────────────────────────────────

    /// Bring a dynamic location into service at `coord`: pop one from the
    /// pool or create one with four fresh exits, register it and set its
    /// exit locks. Terrain content is applied by the caller.
    pub(crate) fn materialize(&mut self, coord: Coord) -> Result<(RoomRef, Materialized), WorldError> {
        let (room, how) = match self.state.rooms.acquire_room() {
            Some(room) => {
                self.metrics.room_pool_hits += 1;
                // Pooled exits still point at the previous generation.
                if let Some(loc) = self.state.rooms.get(room) {
                    for &handle in loc.exits() {
                        if let Some(exit) = self.state.exits.get_mut(handle) {
                            exit.wire(room, room);
                        }
                    }
                }
                (room, Materialized::Recycled)
            }
            None => {
                self.metrics.room_pool_misses += 1;
                let room = self
                    .state
                    .rooms
                    .allocate(Location::Dynamic(DynamicRoom::default()))?;
                let mut exits = ExitList::new();
                for direction in Direction::ALL {
                    exits.push(self.obtain_exit(ExitKey::Cardinal(direction), room)?);
                }
                if let Some(loc) = self.state.rooms.get_mut(room) {
                    *loc.exits_mut() = exits;
                }
                (room, Materialized::Allocated)
            }
        };
        if let Some(loc) = self.state.rooms.get_mut(room) {
            loc.set_coordinates(Some(coord));
        }
        self.state.registry.put(coord, room);
        self.refresh_exit_locks(room);
        debug!(x = coord.x, y = coord.y, %room, how = ?how, "location materialized");
        Ok((room, how))
    }

    /// Evict an idle dynamic location: unbind it, restore the four
    /// cardinal exits and return it to the pool.
    pub fn dispose(&mut self, room: RoomRef) -> Result<(), WorldError> {
        let loc = self.state.rooms.get(room).ok_or(WorldError::StaleHandle)?;
        if loc.is_static() {
            return Err(WorldError::InvariantViolation {
                detail: format!("{room} is static and is never pooled"),
            });
        }
        if !loc.is_poolable(None) {
            return Err(WorldError::InvariantViolation {
                detail: format!("{room} still has occupants"),
            });
        }
        if let Some(coord) = loc.coordinates() {
            if self.state.registry.get(coord) == Some(room) {
                self.state.registry.remove(coord);
            }
        }
        self.retire(room)?;
        self.metrics.evictions += 1;
        debug!(%room, "location evicted");
        Ok(())
    }

    /// Put an unregistered dynamic location back in the pool in canonical
    /// shape.
    pub(crate) fn retire(&mut self, room: RoomRef) -> Result<(), WorldError> {
        self.reshape_for_pool(room)?;
        if let Some(loc) = self.state.rooms.get_mut(room) {
            loc.set_coordinates(None);
        }
        self.state.rooms.release_room(room)
    }

    /// Strip non-cardinal and duplicate exits back to the garage and fill
    /// in any missing direction, leaving exactly one exit per direction in
    /// [`Direction::ALL`] order.
    fn reshape_for_pool(&mut self, room: RoomRef) -> Result<(), WorldError> {
        let current: ExitList = self
            .state
            .rooms
            .get(room)
            .map(|loc| loc.exits().iter().copied().collect())
            .ok_or(WorldError::StaleHandle)?;

        let mut slots: [Option<ExitRef>; 4] = [None; 4];
        for handle in current {
            let direction = match self.state.exits.get(handle) {
                Some(exit) => exit.key().direction(),
                None => {
                    warn!(%room, exit = %handle, "dropping stale exit handle");
                    continue;
                }
            };
            match direction {
                Some(d) if slots[d.index()].is_none() => slots[d.index()] = Some(handle),
                _ => {
                    self.state.exits.release_exit(handle)?;
                    trace!(%room, exit = %handle, "exit stripped");
                }
            }
        }

        let mut canonical = ExitList::new();
        for direction in Direction::ALL {
            let handle = match slots[direction.index()] {
                Some(handle) => handle,
                None => self.obtain_exit(ExitKey::Cardinal(direction), room)?,
            };
            canonical.push(handle);
        }
        if let Some(loc) = self.state.rooms.get_mut(room) {
            *loc.exits_mut() = canonical;
        }
        Ok(())
    }

    /// Deactivate whatever is registered at `coord`.
    ///
    /// Dynamic locations are disposed and must be empty; static portals
    /// are only unregistered. Returns `false` if nothing was registered.
    pub fn delete(&mut self, coord: Coord) -> Result<bool, WorldError> {
        let Some(room) = self.state.registry.get(coord) else {
            return Ok(false);
        };
        match self.state.rooms.get(room) {
            None => {
                warn!(x = coord.x, y = coord.y, %room, "deleting stale registry entry");
                self.state.registry.remove(coord);
            }
            Some(loc) if loc.is_static() => {
                self.state.registry.remove(coord);
                debug!(x = coord.x, y = coord.y, %room, "static portal unregistered");
            }
            Some(loc) => {
                if !loc.is_poolable(None) {
                    return Err(WorldError::InvariantViolation {
                        detail: format!("location at {coord} still has occupants"),
                    });
                }
                self.state.registry.remove(coord);
                self.dispose(room)?;
            }
        }
        Ok(true)
    }

    /// Evict every idle dynamic location and drop stale registry entries.
    pub fn sweep(&mut self) -> SweepReport {
        let report = self.sweep_registry(false);
        if report != SweepReport::default() {
            debug!(stale = report.stale, evicted = report.evicted, "registry swept");
        }
        report
    }

    fn sweep_registry(&mut self, refresh: bool) -> SweepReport {
        let mut report = SweepReport::default();
        let entries: Vec<(Coord, RoomRef)> = self.state.registry.iter().collect();
        for (coord, room) in entries {
            let (is_static, poolable) = match self.state.rooms.get(room) {
                Some(loc) => (loc.is_static(), loc.is_poolable(None)),
                None => {
                    warn!(x = coord.x, y = coord.y, %room, "dropping stale registry entry");
                    self.state.registry.remove(coord);
                    report.stale += 1;
                    continue;
                }
            };
            if is_static {
                continue;
            }
            if poolable {
                self.state.registry.remove(coord);
                match self.dispose(room) {
                    Ok(()) => report.evicted += 1,
                    Err(e) => warn!(x = coord.x, y = coord.y, %room, err = %e, "sweep eviction failed"),
                }
            } else if refresh {
                match self.apply_terrain_content(room, coord) {
                    Ok(()) => report.refreshed += 1,
                    Err(e) => warn!(x = coord.x, y = coord.y, %room, err = %e, "content refresh failed"),
                }
            }
        }
        report
    }

    // ── Consistency ────────────────────────────────────────────────

    fn cardinal_slots(&self, exits: &[ExitRef]) -> ([usize; 4], usize) {
        let mut counts = [0usize; 4];
        let mut named = 0;
        for &handle in exits {
            match self.state.exits.get(handle).map(|e| e.key().direction()) {
                Some(Some(d)) => counts[d.index()] += 1,
                _ => named += 1,
            }
        }
        (counts, named)
    }

    /// Check the structural invariants across registry and pools.
    ///
    /// - every registry entry resolves to a live location recording that
    ///   coordinate, and no location is registered twice;
    /// - every live dynamic location is registered and has one exit per
    ///   direction;
    /// - every pooled location is dynamic, empty, unbound and has exactly
    ///   the four cardinal exits.
    pub fn verify_invariants(&self) -> Result<(), WorldError> {
        let violation = |detail: String| WorldError::InvariantViolation { detail };
        let mut seen = HashSet::new();
        for (coord, room) in self.state.registry.iter() {
            let loc = self
                .state
                .rooms
                .get(room)
                .ok_or_else(|| violation(format!("entry at {coord} names dead {room}")))?;
            if !seen.insert(room) {
                return Err(violation(format!("{room} is registered twice")));
            }
            if loc.coordinates() != Some(coord) {
                return Err(violation(format!(
                    "{room} is registered at {coord} but records {:?}",
                    loc.coordinates()
                )));
            }
        }

        for (room, loc) in self.state.rooms.iter_live() {
            if loc.is_static() {
                continue;
            }
            if !seen.contains(&room) {
                return Err(violation(format!("dynamic {room} is live but unregistered")));
            }
            let (counts, _) = self.cardinal_slots(loc.exits());
            if counts != [1; 4] {
                return Err(violation(format!("dynamic {room} has cardinal exits {counts:?}")));
            }
        }

        for &index in self.state.rooms.pooled_indices() {
            let loc = self
                .state
                .rooms
                .get_pooled(index)
                .ok_or_else(|| violation(format!("free list names live slot {index}")))?;
            if loc.is_static() || !loc.occupants().is_empty() || loc.coordinates().is_some() {
                return Err(violation(format!("pooled slot {index} is not idle")));
            }
            let (counts, named) = self.cardinal_slots(loc.exits());
            if counts != [1; 4] || named != 0 {
                return Err(violation(format!(
                    "pooled slot {index} has cardinal exits {counts:?} and {named} others"
                )));
            }
        }
        Ok(())
    }
}
