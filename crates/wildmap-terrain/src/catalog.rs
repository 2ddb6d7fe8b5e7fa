//! Terrain kinds and the catalog of titles and descriptions.

use std::fmt;

/// Terrain classification of one grid cell, as stored in the terrain file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerrainKind(pub u8);

impl TerrainKind {
    /// Open sea.
    pub const OCEAN: TerrainKind = TerrainKind(0);
    /// Plains.
    pub const PLAIN: TerrainKind = TerrainKind(1);
    /// Hills.
    pub const HILL: TerrainKind = TerrainKind(2);
    /// Mountains.
    pub const MOUNTAIN: TerrainKind = TerrainKind(3);
    /// River.
    pub const RIVER: TerrainKind = TerrainKind(4);
    /// River source.
    pub const RIVER_SOURCE: TerrainKind = TerrainKind(5);
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display content for one terrain kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainEntry {
    /// Title given to every location of this kind.
    pub title: String,
    /// Candidate descriptions; one is picked at random per materialization.
    pub descriptions: Vec<String>,
}

impl TerrainEntry {
    /// Build an entry from string slices.
    pub fn new(title: &str, descriptions: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Positional map from [`TerrainKind`] to [`TerrainEntry`].
///
/// Kind `n` is the `n`-th entry. The assignment is positional because the
/// terrain file stores bare bytes: reordering entries reinterprets every
/// map ever baked against this catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainCatalog {
    entries: Vec<TerrainEntry>,
}

impl TerrainCatalog {
    /// Build a catalog from entries in kind order.
    pub fn new(entries: Vec<TerrainEntry>) -> Self {
        Self { entries }
    }

    /// The six kinds the stock terrain maps are baked against.
    pub fn builtin() -> Self {
        Self::new(vec![
            TerrainEntry::new("Oceano", &["OceanoDesc1", "OceanoDesc2"]),
            TerrainEntry::new("Pianura", &["PianuraDesc1", "PianuraDesc2"]),
            TerrainEntry::new("Collina", &["CollinaDesc1", "CollinaDesc2"]),
            TerrainEntry::new("Montagna", &["MontagnaDesc1", "MontagnaDesc2"]),
            TerrainEntry::new("Fiume", &["FiumeDesc1", "FiumeDesc2"]),
            TerrainEntry::new(
                "Sorgente Fiume",
                &["SorgenteFiumeDesc1", "SorgenteFiumeDesc2"],
            ),
        ])
    }

    /// Look up the entry for `kind`.
    pub fn entry(&self, kind: TerrainKind) -> Option<&TerrainEntry> {
        self.entries.get(kind.0 as usize)
    }

    /// Whether `kind` has an entry.
    pub fn contains(&self, kind: TerrainKind) -> bool {
        self.entry(kind).is_some()
    }

    /// Number of kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no kinds.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(kind, entry)` pairs in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (TerrainKind, &TerrainEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (TerrainKind(i as u8), e))
    }
}

impl Default for TerrainCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_mountain_is_montagna() {
        let c = TerrainCatalog::builtin();
        assert_eq!(c.entry(TerrainKind::MOUNTAIN).unwrap().title, "Montagna");
        assert_eq!(c.entry(TerrainKind::OCEAN).unwrap().title, "Oceano");
        assert_eq!(
            c.entry(TerrainKind::RIVER_SOURCE).unwrap().title,
            "Sorgente Fiume"
        );
    }

    #[test]
    fn builtin_entries_have_descriptions() {
        let c = TerrainCatalog::default();
        assert_eq!(c.len(), 6);
        for (_, e) in c.iter() {
            assert!(!e.descriptions.is_empty());
        }
    }

    #[test]
    fn unknown_kind_has_no_entry() {
        let c = TerrainCatalog::builtin();
        assert!(c.entry(TerrainKind(6)).is_none());
        assert!(!c.contains(TerrainKind(255)));
    }

    #[test]
    fn iter_is_positional() {
        let c = TerrainCatalog::new(vec![
            TerrainEntry::new("A", &["a"]),
            TerrainEntry::new("B", &["b"]),
        ]);
        let kinds: Vec<_> = c.iter().map(|(k, e)| (k, e.title.clone())).collect();
        assert_eq!(
            kinds,
            vec![(TerrainKind(0), "A".to_string()), (TerrainKind(1), "B".to_string())]
        );
    }
}
