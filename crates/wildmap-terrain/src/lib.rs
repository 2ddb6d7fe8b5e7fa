//! Read-only terrain layer for the wildmap world engine.
//!
//! The terrain is a pre-baked classification grid: one byte per cell,
//! loaded once from a compact little-endian file and never mutated.
//! [`TerrainGrid`] answers bounds and lookup queries; [`TerrainCatalog`]
//! maps each [`TerrainKind`] to the title and candidate descriptions a
//! materialized location receives.
//!
//! # File format
//!
//! ```text
//! [width u32 LE] [height u32 LE] [width*height kind bytes, row-major]
//! ```
//!
//! File row 0 holds the highest `y`: a coordinate `(x, y)` lives at
//! `row = height - y - 1`, `col = x`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod codec;
pub mod error;
pub mod grid;

pub use catalog::{TerrainCatalog, TerrainEntry, TerrainKind};
pub use error::TerrainError;
pub use grid::TerrainGrid;
