//! Terrain file builders.
//!
//! - [`terrain_bytes`]: encode a raw row-major cell buffer.
//! - [`TerrainFixture`]: paint cells by grid coordinate, handling the
//!   vertical flip.

use wildmap_core::Coord;
use wildmap_terrain::{codec, TerrainGrid, TerrainKind};

/// Encode a terrain file from row-major cells (row 0 is the highest `y`).
pub fn terrain_bytes(width: u32, height: u32, cells: &[u8]) -> Vec<u8> {
    codec::encode_to_vec(width, height, cells)
}

/// A terrain grid painted cell by cell.
#[derive(Clone, Debug)]
pub struct TerrainFixture {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl TerrainFixture {
    /// A `width` x `height` grid filled with `kind`.
    pub fn filled(width: u32, height: u32, kind: TerrainKind) -> Self {
        Self {
            width,
            height,
            cells: vec![kind.0; (width * height) as usize],
        }
    }

    /// Paint one cell. Panics if `coord` is off the grid.
    pub fn with(mut self, coord: Coord, kind: TerrainKind) -> Self {
        let row = self.height as i32 - coord.y - 1;
        assert!(
            (0..self.width as i32).contains(&coord.x) && (0..self.height as i32).contains(&row),
            "{coord} is outside the {}x{} fixture",
            self.width,
            self.height
        );
        self.cells[row as usize * self.width as usize + coord.x as usize] = kind.0;
        self
    }

    pub fn bytes(&self) -> Vec<u8> {
        terrain_bytes(self.width, self.height, &self.cells)
    }

    pub fn grid(&self) -> TerrainGrid {
        TerrainGrid::load(&self.bytes()).unwrap()
    }
}
