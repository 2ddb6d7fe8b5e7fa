//! Slot arena with a LIFO free list.
//!
//! [`SlotArena`] stores every object ever created for one kind of engine
//! object. Slots are either *live* (handed out, reachable by the caller)
//! or *pooled* (sitting in the free list, waiting to be reacquired).
//! Slots are never removed, so indices are stable for the life of the
//! arena. A slot whose generation counter is exhausted is *retired*
//! instead of pooled: it is never handed out again, so no old handle can
//! resolve to a later occupant.

use std::marker::PhantomData;

use crate::error::ArenaError;
use crate::handle::{ArenaHandle, Recycle};

#[derive(Clone, Debug)]
struct Slot<T> {
    value: T,
    generation: u32,
    pooled: bool,
    retired: bool,
}

impl<T> Slot<T> {
    fn is_live(&self) -> bool {
        !self.pooled && !self.retired
    }
}

/// Arena of recyclable values addressed by generation-checked handles.
///
/// - [`insert`](Self::insert) is the pool-miss path: a brand-new slot.
/// - [`acquire`](Self::acquire) pops the most recently released slot.
/// - [`release`](Self::release) recycles the value, bumps the generation
///   and pushes the slot onto the free list.
#[derive(Clone, Debug)]
pub struct SlotArena<T, H> {
    slots: Vec<Slot<T>>,
    /// Indices of pooled slots; the last entry is reacquired first.
    free_list: Vec<u32>,
    retired: usize,
    _handle: PhantomData<fn() -> H>,
}

impl<T: Recycle, H: ArenaHandle> SlotArena<T, H> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty arena with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            retired: 0,
            _handle: PhantomData,
        }
    }

    /// Store a new live value in a fresh slot.
    pub fn insert(&mut self, value: T) -> Result<H, ArenaError> {
        let index = u32::try_from(self.slots.len()).map_err(|_| ArenaError::CapacityExceeded)?;
        if index == u32::MAX {
            return Err(ArenaError::CapacityExceeded);
        }
        self.slots.push(Slot {
            value,
            generation: 0,
            pooled: false,
            retired: false,
        });
        Ok(H::from_parts(index, 0))
    }

    /// Reacquire the most recently released slot, if any.
    ///
    /// The value is in whatever state [`Recycle::recycle`] left it.
    pub fn acquire(&mut self) -> Option<H> {
        let index = self.free_list.pop()?;
        let slot = &mut self.slots[index as usize];
        slot.pooled = false;
        Some(H::from_parts(index, slot.generation))
    }

    /// Return a live slot to the free list.
    ///
    /// Invalidates every outstanding handle to the slot. A slot at the
    /// last generation is recycled and retired rather than pooled.
    pub fn release(&mut self, handle: H) -> Result<(), ArenaError> {
        let index = handle.index();
        let slot = self
            .slots
            .get_mut(index as usize)
            .ok_or(ArenaError::UnknownSlot { index })?;
        if slot.pooled {
            return Err(ArenaError::AlreadyPooled { index });
        }
        if slot.retired || slot.generation != handle.generation() {
            return Err(ArenaError::StaleHandle {
                index,
                handle_generation: handle.generation(),
                slot_generation: slot.generation,
            });
        }
        slot.value.recycle();
        match slot.generation.checked_add(1) {
            Some(next) => {
                slot.generation = next;
                slot.pooled = true;
                self.free_list.push(index);
            }
            None => {
                slot.retired = true;
                self.retired += 1;
            }
        }
        Ok(())
    }

    /// Borrow a live value.
    ///
    /// Returns `None` for pooled slots and stale handles.
    pub fn get(&self, handle: H) -> Option<&T> {
        let slot = self.slots.get(handle.index() as usize)?;
        (slot.is_live() && slot.generation == handle.generation()).then_some(&slot.value)
    }

    /// Mutably borrow a live value.
    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if !slot.is_live() || slot.generation != handle.generation() {
            return None;
        }
        Some(&mut slot.value)
    }

    /// Borrow a pooled value by index, for inspecting the free list.
    pub fn get_pooled(&self, index: u32) -> Option<&T> {
        let slot = self.slots.get(index as usize)?;
        slot.pooled.then_some(&slot.value)
    }

    /// Whether `handle` currently resolves to a live value.
    pub fn contains(&self, handle: H) -> bool {
        self.get(handle).is_some()
    }

    /// Whether the slot at `index` sits in the free list.
    pub fn is_pooled(&self, index: u32) -> bool {
        self.slots
            .get(index as usize)
            .is_some_and(|slot| slot.pooled)
    }

    /// Number of live slots.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free_list.len() - self.retired
    }

    /// Number of slots retired with an exhausted generation.
    pub fn retired_count(&self) -> usize {
        self.retired
    }

    /// Number of pooled slots.
    pub fn pooled_count(&self) -> usize {
        self.free_list.len()
    }

    /// Iterate over live slots with their current handles.
    pub fn iter_live(&self) -> impl Iterator<Item = (H, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.is_live().then(|| (H::from_parts(i as u32, slot.generation), &slot.value))
        })
    }

    /// Indices in the free list, oldest release first.
    pub fn pooled_indices(&self) -> &[u32] {
        &self.free_list
    }
}

impl<T: Recycle, H: ArenaHandle> Default for SlotArena<T, H> {
    fn default() -> Self {
        Self::new()
    }
}
