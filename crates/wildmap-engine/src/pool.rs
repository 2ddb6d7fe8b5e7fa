//! Free lists of idle dynamic locations and detached exits.
//!
//! Both pools wrap a [`SlotArena`], which holds live and pooled objects
//! alike. Acquiring pops the most recently released slot; a miss is
//! reported as `None` and the caller allocates.

use tracing::trace;
use wildmap_arena::{ArenaError, SlotArena};
use wildmap_core::{ExitRef, RoomRef, WorldError};

use crate::exit::{Exit, ExitKey};
use crate::room::Location;

fn arena_violation(e: ArenaError) -> WorldError {
    match e {
        ArenaError::StaleHandle { .. } | ArenaError::UnknownSlot { .. } => WorldError::StaleHandle,
        other => WorldError::InvariantViolation {
            detail: other.to_string(),
        },
    }
}

// ── RoomPool ───────────────────────────────────────────────────────

/// Every location ever created, live or pooled.
#[derive(Clone, Debug, Default)]
pub struct RoomPool {
    arena: SlotArena<Location, RoomRef>,
}

impl RoomPool {
    /// An empty pool pre-sized for `capacity` locations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
        }
    }

    /// Pop the most recently released dynamic location.
    pub fn acquire_room(&mut self) -> Option<RoomRef> {
        let room = self.arena.acquire()?;
        trace!(%room, "room pool hit");
        Some(room)
    }

    /// Return an idle dynamic location to the pool.
    ///
    /// The location must be dynamic, empty of occupants and already
    /// unbound from its coordinate.
    pub fn release_room(&mut self, room: RoomRef) -> Result<(), WorldError> {
        let loc = self.arena.get(room).ok_or(WorldError::StaleHandle)?;
        if loc.is_static() {
            return Err(WorldError::InvariantViolation {
                detail: format!("{room} is static and cannot be pooled"),
            });
        }
        if !loc.occupants().is_empty() {
            return Err(WorldError::InvariantViolation {
                detail: format!("{room} still has occupants"),
            });
        }
        if let Some(coord) = loc.coordinates() {
            return Err(WorldError::InvariantViolation {
                detail: format!("{room} is still bound to {coord}"),
            });
        }
        self.arena.release(room).map_err(arena_violation)?;
        trace!(%room, "room pooled");
        Ok(())
    }

    /// Store a brand-new location (the pool-miss path).
    pub fn allocate(&mut self, location: Location) -> Result<RoomRef, WorldError> {
        let room = self.arena.insert(location).map_err(arena_violation)?;
        trace!(%room, "room allocated");
        Ok(room)
    }

    /// Borrow a live location.
    pub fn get(&self, room: RoomRef) -> Option<&Location> {
        self.arena.get(room)
    }

    /// Mutably borrow a live location.
    pub fn get_mut(&mut self, room: RoomRef) -> Option<&mut Location> {
        self.arena.get_mut(room)
    }

    /// Whether `room` resolves to a live location.
    pub fn contains(&self, room: RoomRef) -> bool {
        self.arena.contains(room)
    }

    /// Whether the slot at `index` is pooled.
    pub fn is_pooled(&self, index: u32) -> bool {
        self.arena.is_pooled(index)
    }

    /// Borrow a pooled location by slot index.
    pub fn get_pooled(&self, index: u32) -> Option<&Location> {
        self.arena.get_pooled(index)
    }

    /// Slot indices of pooled locations, oldest first.
    pub fn pooled_indices(&self) -> &[u32] {
        self.arena.pooled_indices()
    }

    /// Number of pooled locations.
    pub fn pooled_count(&self) -> usize {
        self.arena.pooled_count()
    }

    /// Number of live locations.
    pub fn live_count(&self) -> usize {
        self.arena.live_count()
    }

    /// Iterate over live locations.
    pub fn iter_live(&self) -> impl Iterator<Item = (RoomRef, &Location)> {
        self.arena.iter_live()
    }
}

// ── ExitGarage ─────────────────────────────────────────────────────

/// Every exit ever created, live or garaged.
#[derive(Clone, Debug, Default)]
pub struct ExitGarage {
    arena: SlotArena<Exit, ExitRef>,
}

impl ExitGarage {
    /// An empty garage pre-sized for `capacity` exits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
        }
    }

    /// Pop the most recently garaged exit and rename it to `key`.
    ///
    /// The exit comes back detached and locked; the caller wires it.
    pub fn acquire_exit(&mut self, key: ExitKey) -> Option<ExitRef> {
        let exit = self.arena.acquire()?;
        if let Some(e) = self.arena.get_mut(exit) {
            e.rekey(key);
        }
        trace!(%exit, "exit garage hit");
        Some(exit)
    }

    /// Garage a live exit. Recycling detaches and locks it.
    pub fn release_exit(&mut self, exit: ExitRef) -> Result<(), WorldError> {
        self.arena.release(exit).map_err(arena_violation)?;
        trace!(%exit, "exit garaged");
        Ok(())
    }

    /// Store a brand-new exit (the garage-miss path).
    pub fn allocate(&mut self, exit: Exit) -> Result<ExitRef, WorldError> {
        let handle = self.arena.insert(exit).map_err(arena_violation)?;
        trace!(exit = %handle, "exit allocated");
        Ok(handle)
    }

    /// Borrow a live exit.
    pub fn get(&self, exit: ExitRef) -> Option<&Exit> {
        self.arena.get(exit)
    }

    /// Mutably borrow a live exit.
    pub fn get_mut(&mut self, exit: ExitRef) -> Option<&mut Exit> {
        self.arena.get_mut(exit)
    }

    /// Whether `exit` resolves to a live exit.
    pub fn contains(&self, exit: ExitRef) -> bool {
        self.arena.contains(exit)
    }

    /// Number of garaged exits.
    pub fn pooled_count(&self) -> usize {
        self.arena.pooled_count()
    }

    /// Number of live exits.
    pub fn live_count(&self) -> usize {
        self.arena.live_count()
    }

    /// Iterate over live exits.
    pub fn iter_live(&self) -> impl Iterator<Item = (ExitRef, &Exit)> {
        self.arena.iter_live()
    }
}
