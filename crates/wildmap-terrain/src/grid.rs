//! The immutable terrain classification grid.

use std::io::Read;
use std::path::Path;

use wildmap_core::Coord;

use crate::catalog::TerrainKind;
use crate::codec;
use crate::error::TerrainError;

/// Memory-resident classification of every grid cell into a [`TerrainKind`].
///
/// Read-only after load. A coordinate `(x, y)` is in bounds iff
/// `0 <= x < width` and `0 <= height - y - 1 < height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    width: u32,
    height: u32,
    /// Row-major kind bytes, `width * height` long; row 0 is the highest `y`.
    cells: Vec<u8>,
}

impl TerrainGrid {
    /// Parse a terrain file already in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildmap_core::Coord;
    /// use wildmap_terrain::TerrainGrid;
    ///
    /// let mut bytes = vec![2, 0, 0, 0, 1, 0, 0, 0];
    /// bytes.extend_from_slice(&[1, 3]);
    /// let grid = TerrainGrid::load(&bytes).unwrap();
    /// assert_eq!(grid.terrain_at(Coord::new(1, 0)).unwrap().0, 3);
    /// assert!(!grid.is_valid(Coord::new(2, 0)));
    /// ```
    pub fn load(bytes: &[u8]) -> Result<Self, TerrainError> {
        let (width, height, cells) = codec::decode(bytes)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Read and parse a terrain file from any reader.
    pub fn from_reader(r: &mut dyn Read) -> Result<Self, TerrainError> {
        let mut bytes = Vec::new();
        r.read_to_end(&mut bytes)?;
        Self::load(&bytes)
    }

    /// Read and parse a terrain file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        let bytes = std::fs::read(path)?;
        Self::load(&bytes)
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat cell index of `coord`, or `None` if out of bounds.
    fn cell_index(&self, coord: Coord) -> Option<usize> {
        let row = self.height as i64 - coord.y as i64 - 1;
        let col = coord.x as i64;
        if col < 0 || col >= self.width as i64 || row < 0 || row >= self.height as i64 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Whether `coord` is on the grid.
    pub fn is_valid(&self, coord: Coord) -> bool {
        self.cell_index(coord).is_some()
    }

    /// The terrain kind at `coord`.
    pub fn terrain_at(&self, coord: Coord) -> Result<TerrainKind, TerrainError> {
        self.cell_index(coord)
            .map(|i| TerrainKind(self.cells[i]))
            .ok_or(TerrainError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
    }

    /// Iterate over every cell as `(coord, kind)`, file order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TerrainKind)> + '_ {
        let width = self.width as usize;
        let height = self.height as i32;
        self.cells.iter().enumerate().map(move |(i, &b)| {
            let row = (i / width) as i32;
            let col = (i % width) as i32;
            (Coord::new(col, height - row - 1), TerrainKind(b))
        })
    }

    /// Encode back into the terrain file format.
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::encode_to_vec(self.width, self.height, &self.cells)
    }
}
