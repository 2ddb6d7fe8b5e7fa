//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the builder-input for constructing a
//! [`WorldEngine`](crate::WorldEngine). [`validate()`](WorldConfig::validate)
//! checks the catalog on its own; the engine constructors additionally check
//! every grid byte against it.

use std::error::Error;
use std::fmt;

use wildmap_core::Coord;
use wildmap_terrain::{TerrainCatalog, TerrainError, TerrainGrid, TerrainKind};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`WorldConfig`] or building an engine.
#[derive(Debug)]
pub enum ConfigError {
    /// The terrain file could not be read or parsed.
    Terrain(TerrainError),
    /// The catalog has no terrain kinds.
    EmptyCatalog,
    /// The catalog has more kinds than a terrain byte can name.
    CatalogTooLarge {
        /// Number of entries supplied.
        len: usize,
    },
    /// A terrain kind has no candidate descriptions.
    EmptyDescriptions {
        /// The kind with nothing to pick from.
        kind: TerrainKind,
    },
    /// A grid cell holds a byte with no catalog entry.
    UnknownTerrainKind {
        /// The unknown byte.
        kind: TerrainKind,
        /// First cell found holding it.
        coord: Coord,
    },
    /// The wild area tag is empty.
    EmptyWildArea,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terrain(e) => write!(f, "terrain: {e}"),
            Self::EmptyCatalog => write!(f, "terrain catalog has no kinds"),
            Self::CatalogTooLarge { len } => {
                write!(f, "terrain catalog has {len} kinds, at most 256 fit a byte")
            }
            Self::EmptyDescriptions { kind } => {
                write!(f, "terrain kind {kind} has no descriptions")
            }
            Self::UnknownTerrainKind { kind, coord } => {
                write!(f, "terrain kind {kind} at {coord} is not in the catalog")
            }
            Self::EmptyWildArea => write!(f, "wild_area must not be empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Terrain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TerrainError> for ConfigError {
    fn from(e: TerrainError) -> Self {
        Self::Terrain(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for a wilderness engine.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Titles and descriptions per terrain kind. Default: the six built-in kinds.
    pub catalog: TerrainCatalog,
    /// Seed for the description picker. Default: 0.
    pub seed: u64,
    /// Area tag of every dynamic location. Default: `"wild"`.
    pub wild_area: String,
    /// Number of locations to pre-size storage for. Default: 64.
    pub room_capacity_hint: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            catalog: TerrainCatalog::builtin(),
            seed: 0,
            wild_area: "wild".to_string(),
            room_capacity_hint: 64,
        }
    }
}

impl WorldConfig {
    /// Check the structural invariants that do not depend on a grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.catalog.len() > 256 {
            return Err(ConfigError::CatalogTooLarge {
                len: self.catalog.len(),
            });
        }
        if let Some((kind, _)) = self
            .catalog
            .iter()
            .find(|(_, entry)| entry.descriptions.is_empty())
        {
            return Err(ConfigError::EmptyDescriptions { kind });
        }
        if self.wild_area.is_empty() {
            return Err(ConfigError::EmptyWildArea);
        }
        Ok(())
    }

    /// Check that every cell of `grid` names a catalog kind.
    pub fn validate_grid(&self, grid: &TerrainGrid) -> Result<(), ConfigError> {
        self.validate()?;
        match grid.iter().find(|(_, kind)| !self.catalog.contains(*kind)) {
            Some((coord, kind)) => Err(ConfigError::UnknownTerrainKind { kind, coord }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildmap_terrain::TerrainEntry;

    fn grid(width: u32, height: u32, cells: &[u8]) -> TerrainGrid {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(cells);
        TerrainGrid::load(&bytes).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = WorldConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.wild_area, "wild");
        assert_eq!(cfg.catalog.len(), 6);
    }

    #[test]
    fn empty_catalog_rejected() {
        let cfg = WorldConfig {
            catalog: TerrainCatalog::new(Vec::new()),
            ..WorldConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyCatalog)));
    }

    #[test]
    fn oversized_catalog_rejected() {
        let cfg = WorldConfig {
            catalog: TerrainCatalog::new(vec![TerrainEntry::new("X", &["x"]); 257]),
            ..WorldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::CatalogTooLarge { len: 257 })
        ));
    }

    #[test]
    fn kind_without_descriptions_rejected() {
        let cfg = WorldConfig {
            catalog: TerrainCatalog::new(vec![
                TerrainEntry::new("Ok", &["fine"]),
                TerrainEntry::new("Bare", &[]),
            ]),
            ..WorldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::EmptyDescriptions {
                kind: TerrainKind(1)
            })
        ));
    }

    #[test]
    fn empty_wild_area_rejected() {
        let cfg = WorldConfig {
            wild_area: String::new(),
            ..WorldConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyWildArea)));
    }

    #[test]
    fn unknown_grid_byte_reports_first_cell() {
        let cfg = WorldConfig::default();
        // Row 0 is y = 1, so byte index 1 is (1, 1).
        let g = grid(2, 2, &[0, 9, 1, 1]);
        match cfg.validate_grid(&g) {
            Err(ConfigError::UnknownTerrainKind { kind, coord }) => {
                assert_eq!(kind, TerrainKind(9));
                assert_eq!(coord, Coord::new(1, 1));
            }
            other => panic!("expected UnknownTerrainKind, got {other:?}"),
        }
        assert!(cfg.validate_grid(&grid(2, 1, &[3, 5])).is_ok());
    }

    #[test]
    fn terrain_error_is_source() {
        let err: ConfigError = TerrainError::Format {
            detail: "short".to_string(),
        }
        .into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("terrain: "));
    }
}
