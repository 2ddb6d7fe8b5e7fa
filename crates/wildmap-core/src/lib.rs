//! Core types and traits for the wildmap world engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the wildmap workspace:
//! coordinates, directions, typed handles, error types, and the hook
//! traits through which travelling entities and locations observe moves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod options;
pub mod traits;

pub use direction::Direction;
pub use error::{HookError, HookStage, MoveError, WorldError};
pub use id::{Coord, EntityId, ExitRef, RoomRef};
pub use options::{LastKnown, MoveOptions};
pub use traits::{NoopRoomHooks, RoomHooks, Traveler};
