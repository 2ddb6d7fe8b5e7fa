//! Wildmap: a sparse, pooled wilderness for text-based multiplayer worlds.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all wildmap sub-crates. For most users, adding `wildmap` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wildmap::prelude::*;
//!
//! struct Ranger {
//!     id: EntityId,
//!     location: Option<RoomRef>,
//!     coordinates: Option<Coord>,
//! }
//!
//! impl Traveler for Ranger {
//!     fn entity_id(&self) -> EntityId { self.id }
//!     fn location(&self) -> Option<RoomRef> { self.location }
//!     fn set_location(&mut self, location: Option<RoomRef>) { self.location = location; }
//!     fn coordinates(&self) -> Option<Coord> { self.coordinates }
//!     fn set_coordinates(&mut self, coordinates: Option<Coord>) { self.coordinates = coordinates; }
//! }
//!
//! // A 3x2 grid of plains: [width u32 LE][height u32 LE][cells...]
//! let mut bytes = vec![3, 0, 0, 0, 2, 0, 0, 0];
//! bytes.extend([TerrainKind::PLAIN.0; 6]);
//! let mut world = WorldEngine::from_bytes(&bytes, WorldConfig::default()).unwrap();
//!
//! let mut ranger = Ranger { id: EntityId(1), location: None, coordinates: None };
//! world.move_entity(&mut ranger, Some(Coord::new(0, 0)), &MoveOptions::default()).unwrap();
//! world.traverse(&mut ranger, "est", &MoveOptions::default()).unwrap();
//! assert_eq!(ranger.coordinates, Some(Coord::new(1, 0)));
//! assert_eq!(world.room(ranger.location.unwrap()).unwrap().title(), "Pianura");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wildmap-core` | Coordinates, handles, directions, errors, hook traits |
//! | [`arena`] | `wildmap-arena` | Generation-checked slot arena with a free list |
//! | [`terrain`] | `wildmap-terrain` | Terrain grid, file codec, terrain catalog |
//! | [`engine`] | `wildmap-engine` | Registry, pools, world engine, movement |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`wildmap-core`).
///
/// Entities take part in moves through [`types::Traveler`]; locations
/// observe them through [`types::RoomHooks`].
pub use wildmap_core as types;

/// Slot storage with recycling (`wildmap-arena`).
pub use wildmap_arena as arena;

/// Read-only terrain layer (`wildmap-terrain`).
///
/// [`terrain::TerrainGrid`] loads the baked map file;
/// [`terrain::TerrainCatalog`] maps terrain kinds to titles and
/// descriptions.
pub use wildmap_terrain as terrain;

/// World engine (`wildmap-engine`).
///
/// [`engine::WorldEngine`] owns the registry and both pools and runs
/// every move. [`engine::global`] wraps one engine in a process-wide
/// singleton.
pub use wildmap_engine as engine;

/// Common imports for typical wildmap usage.
///
/// ```rust
/// use wildmap::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use wildmap_core::{
        Coord, Direction, EntityId, ExitRef, LastKnown, MoveOptions, RoomHooks, RoomRef, Traveler,
    };

    // Errors
    pub use wildmap_core::{HookError, HookStage, MoveError, WorldError};

    // Terrain
    pub use wildmap_terrain::{TerrainCatalog, TerrainEntry, TerrainGrid, TerrainKind};

    // Engine
    pub use wildmap_engine::{
        ConfigError, EngineMetrics, Location, MovePath, MoveReport, StaticRoom, WorldConfig,
        WorldEngine,
    };
}
