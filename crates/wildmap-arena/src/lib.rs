//! Slot arenas with stable indices for recycling engine objects.
//!
//! Locations and connectors are never destroyed once created: when the
//! engine evicts one it goes back to a free list and is handed out again
//! on the next materialization. This crate provides the storage for that
//! cycle.
//!
//! # Architecture
//!
//! ```text
//! SlotArena<T, H>
//! ├── Slot<T>[]   (value + generation + pooled flag, index never reused for anything else)
//! └── free_list   (indices of pooled slots, popped last-in-first-out)
//! ```
//!
//! A handle `H` carries `(index, generation)`. Releasing a slot bumps its
//! generation, so every handle issued before the release stops resolving:
//! use-after-release shows up as `None` / [`ArenaError::StaleHandle`]
//! instead of silently aliasing the recycled object.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
pub mod slab;

pub use error::ArenaError;
pub use handle::{ArenaHandle, Recycle};
pub use slab::SlotArena;
