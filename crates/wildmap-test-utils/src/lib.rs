//! Test utilities and mock types for wildmap development.
//!
//! Provides a recording [`Traveler`] ([`MockTraveler`]), location-side
//! hooks that record or fail ([`RecordingRoomHooks`],
//! [`FailingRoomHooks`]), and terrain file builders in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use wildmap_core::{
    Coord, EntityId, HookError, HookStage, LastKnown, MoveOptions, RoomHooks, RoomRef, Traveler,
};

pub use fixtures::{terrain_bytes, TerrainFixture};

// ── MockTraveler ───────────────────────────────────────────────────

/// One hook call observed by a [`MockTraveler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TravelerCall {
    PreMove {
        destination: Option<RoomRef>,
        coordinates: Option<Coord>,
    },
    Departure {
        destination: RoomRef,
        quiet: bool,
    },
    Arrival {
        source: Option<RoomRef>,
        quiet: bool,
    },
    PostMove {
        source: Option<RoomRef>,
    },
}

impl TravelerCall {
    pub fn stage(&self) -> HookStage {
        match self {
            Self::PreMove { .. } => HookStage::PreMove,
            Self::Departure { .. } => HookStage::Departure,
            Self::Arrival { .. } => HookStage::Arrival,
            Self::PostMove { .. } => HookStage::PostMove,
        }
    }
}

/// [`Traveler`] that records every hook call.
///
/// Set [`veto`](MockTraveler::veto) to decline every move, or
/// [`fail_at`](MockTraveler::fail_at) to make one hook stage error.
#[derive(Clone, Debug)]
pub struct MockTraveler {
    pub id: EntityId,
    pub location: Option<RoomRef>,
    pub coordinates: Option<Coord>,
    pub last_known: Option<LastKnown>,
    pub calls: Vec<TravelerCall>,
    pub veto: bool,
    pub fail_at: Option<HookStage>,
}

impl MockTraveler {
    pub fn new(id: u64) -> Self {
        Self {
            id: EntityId(id),
            location: None,
            coordinates: None,
            last_known: None,
            calls: Vec::new(),
            veto: false,
            fail_at: None,
        }
    }

    /// Decline every move at the pre-move check.
    pub fn vetoing(mut self) -> Self {
        self.veto = true;
        self
    }

    /// Fail the hook for `stage`.
    pub fn failing_at(mut self, stage: HookStage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    /// Stages called so far, in order.
    pub fn stages(&self) -> Vec<HookStage> {
        self.calls.iter().map(TravelerCall::stage).collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn check(&self, stage: HookStage) -> Result<(), HookError> {
        if self.fail_at == Some(stage) {
            return Err(HookError::new(format!("{stage} refused by {}", self.id)));
        }
        Ok(())
    }
}

impl Traveler for MockTraveler {
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
        self.last_known.clone()
    }

    fn set_last_known(&mut self, last: LastKnown) {
        self.last_known = Some(last);
    }

    fn pre_move(
        &mut self,
        destination: Option<RoomRef>,
        coordinates: Option<Coord>,
    ) -> Result<bool, HookError> {
        self.calls.push(TravelerCall::PreMove {
            destination,
            coordinates,
        });
        self.check(HookStage::PreMove)?;
        Ok(!self.veto)
    }

    fn announce_departure(
        &mut self,
        destination: RoomRef,
        options: &MoveOptions,
    ) -> Result<(), HookError> {
        self.calls.push(TravelerCall::Departure {
            destination,
            quiet: options.quiet,
        });
        self.check(HookStage::Departure)
    }

    fn announce_arrival(
        &mut self,
        source: Option<RoomRef>,
        options: &MoveOptions,
    ) -> Result<(), HookError> {
        self.calls.push(TravelerCall::Arrival {
            source,
            quiet: options.quiet,
        });
        self.check(HookStage::Arrival)
    }

    fn post_move(&mut self, source: Option<RoomRef>) -> Result<(), HookError> {
        self.calls.push(TravelerCall::PostMove { source });
        self.check(HookStage::PostMove)
    }
}

// ── Room hooks ─────────────────────────────────────────────────────

/// One location-side hook call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomEvent {
    Leaving {
        room: RoomRef,
        entity: EntityId,
        destination: RoomRef,
    },
    Arrived {
        room: RoomRef,
        entity: EntityId,
        source: Option<RoomRef>,
    },
}

/// [`RoomHooks`] that appends every call to a shared log.
///
/// Clone it before boxing it into the engine and read the log from the
/// clone.
#[derive(Clone, Debug, Default)]
pub struct RecordingRoomHooks {
    events: Arc<Mutex<Vec<RoomEvent>>>,
}

impl RecordingRoomHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RoomEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl RoomHooks for RecordingRoomHooks {
    fn on_entity_leaving(
        &mut self,
        room: RoomRef,
        entity: EntityId,
        destination: RoomRef,
    ) -> Result<(), HookError> {
        self.events.lock().unwrap().push(RoomEvent::Leaving {
            room,
            entity,
            destination,
        });
        Ok(())
    }

    fn on_entity_arrived(
        &mut self,
        room: RoomRef,
        entity: EntityId,
        source: Option<RoomRef>,
    ) -> Result<(), HookError> {
        self.events.lock().unwrap().push(RoomEvent::Arrived {
            room,
            entity,
            source,
        });
        Ok(())
    }
}

/// [`RoomHooks`] that fails one stage after `succeed_first` good calls.
#[derive(Clone, Debug)]
pub struct FailingRoomHooks {
    pub stage: HookStage,
    pub succeed_first: usize,
    calls: usize,
}

impl FailingRoomHooks {
    /// Fail every `on_entity_leaving`.
    pub fn leaving() -> Self {
        Self {
            stage: HookStage::Leaving,
            succeed_first: 0,
            calls: 0,
        }
    }

    /// Fail every `on_entity_arrived`.
    pub fn arrived() -> Self {
        Self {
            stage: HookStage::Arrived,
            succeed_first: 0,
            calls: 0,
        }
    }

    /// Let the first `n` calls of the failing stage through.
    pub fn after(mut self, n: usize) -> Self {
        self.succeed_first = n;
        self
    }

    fn hit(&mut self, stage: HookStage) -> Result<(), HookError> {
        if stage != self.stage {
            return Ok(());
        }
        self.calls += 1;
        if self.calls > self.succeed_first {
            return Err(HookError::new(format!("{stage} failed on call {}", self.calls)));
        }
        Ok(())
    }
}

impl RoomHooks for FailingRoomHooks {
    fn on_entity_leaving(
        &mut self,
        _room: RoomRef,
        _entity: EntityId,
        _destination: RoomRef,
    ) -> Result<(), HookError> {
        self.hit(HookStage::Leaving)
    }

    fn on_entity_arrived(
        &mut self,
        _room: RoomRef,
        _entity: EntityId,
        _source: Option<RoomRef>,
    ) -> Result<(), HookError> {
        self.hit(HookStage::Arrived)
    }
}
