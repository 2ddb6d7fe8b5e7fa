//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The handle's index does not name a slot in this arena.
    UnknownSlot {
        /// The unrecognised index.
        index: u32,
    },
    /// The handle's generation is older than the slot's: the object was
    /// released (and possibly reacquired) since the handle was issued.
    StaleHandle {
        /// Slot index.
        index: u32,
        /// The generation encoded in the handle.
        handle_generation: u32,
        /// The slot's current generation.
        slot_generation: u32,
    },
    /// Attempted to release a slot that is already in the free list.
    AlreadyPooled {
        /// Slot index.
        index: u32,
    },
    /// The arena already holds `u32::MAX` slots.
    CapacityExceeded,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSlot { index } => write!(f, "unknown slot {index}"),
            Self::StaleHandle {
                index,
                handle_generation,
                slot_generation,
            } => {
                write!(
                    f,
                    "stale handle for slot {index}: generation {handle_generation}, slot at {slot_generation}"
                )
            }
            Self::AlreadyPooled { index } => write!(f, "slot {index} is already pooled"),
            Self::CapacityExceeded => write!(f, "arena slot capacity exceeded"),
        }
    }
}

impl Error for ArenaError {}
