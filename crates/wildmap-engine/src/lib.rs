//! Sparse wilderness engine for text-based multiplayer worlds.
//!
//! A large procedural map is backed by a terrain grid of one byte per
//! cell, but only coordinates that something currently occupies have a
//! location object. Idle locations and their exits are recycled through
//! free lists instead of being destroyed.
//!
//! # Architecture
//!
//! ```text
//! WorldEngine
//! ├── TerrainGrid + TerrainCatalog   (read-only, rebuilt from config)
//! ├── WorldState                     (persisted)
//! │   ├── RoomRegistry  coord → RoomRef
//! │   ├── RoomPool      SlotArena<Location, RoomRef>
//! │   └── ExitGarage    SlotArena<Exit, ExitRef>
//! ├── RoomHooks                      (location-side callbacks)
//! └── ChaCha8Rng                     (description picker)
//! ```
//!
//! Entities are never owned by the engine: [`WorldEngine::move_entity`]
//! reads and writes them through the
//! [`Traveler`](wildmap_core::Traveler) trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod exit;
pub mod global;
pub mod metrics;
pub mod movement;
pub mod pool;
pub mod registry;
pub mod room;
pub mod store;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use exit::{Exit, ExitKey};
pub use global::{InitError, Startup};
pub use metrics::EngineMetrics;
pub use movement::{MovePath, MoveReport};
pub use pool::{ExitGarage, RoomPool};
pub use registry::RoomRegistry;
pub use room::{DynamicRoom, Location, StaticRoom};
pub use store::{MemoryStore, WorldState, WorldStore};
pub use world::{SweepReport, WorldEngine};
