//! Error types for terrain loading and lookup.

use std::fmt;
use std::io;

use wildmap_core::Coord;

/// Errors arising from loading the terrain file or querying the grid.
#[derive(Debug)]
pub enum TerrainError {
    /// The terrain file could not be read.
    Io(io::Error),
    /// The byte stream is not a valid terrain file (`FormatError`).
    Format {
        /// Human-readable description of what is wrong.
        detail: String,
    },
    /// A coordinate fails the grid's bounds check.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Format { detail } => write!(f, "malformed terrain file: {detail}"),
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "coordinate {coord} outside {width}x{height} grid")
            }
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TerrainError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
