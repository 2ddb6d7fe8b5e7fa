//! Handle and recycling traits.

use wildmap_core::{ExitRef, RoomRef};

/// A copyable `(index, generation)` pair that addresses one arena slot.
pub trait ArenaHandle: Copy + Eq {
    /// Build a handle from its parts.
    fn from_parts(index: u32, generation: u32) -> Self;
    /// Stable slot index.
    fn index(&self) -> u32;
    /// Generation of the slot when the handle was issued.
    fn generation(&self) -> u32;
}

impl ArenaHandle for RoomRef {
    fn from_parts(index: u32, generation: u32) -> Self {
        RoomRef { index, generation }
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn generation(&self) -> u32 {
        self.generation
    }
}

impl ArenaHandle for ExitRef {
    fn from_parts(index: u32, generation: u32) -> Self {
        ExitRef { index, generation }
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn generation(&self) -> u32 {
        self.generation
    }
}

/// Values that can be wiped for reuse when their slot is released.
///
/// `recycle` clears per-use data but keeps whatever structure makes the
/// object cheap to hand out again.
pub trait Recycle {
    /// Reset the value to its pooled state.
    fn recycle(&mut self);
}
