//! Locations: hand-authored static portals and pooled dynamic rooms.

use smallvec::SmallVec;
use wildmap_arena::Recycle;
use wildmap_core::{Coord, EntityId, ExitRef};

/// Entities and objects inside a location.
pub type Occupants = SmallVec<[EntityId; 4]>;

/// Exits owned by a location.
pub type ExitList = SmallVec<[ExitRef; 4]>;

/// Description given to a freshly created location before terrain content
/// is applied.
pub const EMPTY_ROOM_DESCRIPTION: &str = "Una stanza vuota.";

// ── StaticRoom ─────────────────────────────────────────────────────

/// A hand-authored location bound to a coordinate.
///
/// Static rooms are registered and unregistered by hand and are never
/// pooled, whatever they contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticRoom {
    /// Stable key, e.g. `wild_12_4`.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Area tag, recorded as last-known area when an entity merges in.
    pub area: String,
    pub(crate) coordinates: Option<Coord>,
    pub(crate) occupants: Occupants,
    pub(crate) exits: ExitList,
}

impl StaticRoom {
    /// Build an unregistered, empty static room.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
            area: area.into(),
            coordinates: None,
            occupants: Occupants::new(),
            exits: ExitList::new(),
        }
    }
}

// ── DynamicRoom ────────────────────────────────────────────────────

/// An engine-owned location materialized for one coordinate at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamicRoom {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) coordinates: Option<Coord>,
    pub(crate) occupants: Occupants,
    pub(crate) exits: ExitList,
}

impl Default for DynamicRoom {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: EMPTY_ROOM_DESCRIPTION.to_string(),
            coordinates: None,
            occupants: Occupants::new(),
            exits: ExitList::new(),
        }
    }
}

// ── Location ───────────────────────────────────────────────────────

/// Any addressable location in the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// Hand-authored, never pooled.
    Static(StaticRoom),
    /// Engine-owned, pooled when idle.
    Dynamic(DynamicRoom),
}

impl Location {
    /// Whether this is a static portal.
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Display title.
    pub fn title(&self) -> &str {
        match self {
            Self::Static(r) => &r.title,
            Self::Dynamic(r) => &r.title,
        }
    }

    /// Display description.
    pub fn description(&self) -> &str {
        match self {
            Self::Static(r) => &r.description,
            Self::Dynamic(r) => &r.description,
        }
    }

    /// The coordinate this location currently stands for.
    pub fn coordinates(&self) -> Option<Coord> {
        match self {
            Self::Static(r) => r.coordinates,
            Self::Dynamic(r) => r.coordinates,
        }
    }

    /// Area tag: the static room's own, or `wild_area` for dynamic rooms.
    pub fn area<'a>(&'a self, wild_area: &'a str) -> &'a str {
        match self {
            Self::Static(r) => &r.area,
            Self::Dynamic(_) => wild_area,
        }
    }

    /// Entities and objects inside.
    pub fn occupants(&self) -> &[EntityId] {
        match self {
            Self::Static(r) => &r.occupants,
            Self::Dynamic(r) => &r.occupants,
        }
    }

    /// Exits owned by this location.
    pub fn exits(&self) -> &[ExitRef] {
        match self {
            Self::Static(r) => &r.exits,
            Self::Dynamic(r) => &r.exits,
        }
    }

    /// Whether `entity` is inside.
    pub fn contains(&self, entity: EntityId) -> bool {
        self.occupants().contains(&entity)
    }

    /// Whether this location may go back to the pool once `exclude` (if
    /// any) has left: dynamic, and holding nothing but exits.
    pub fn is_poolable(&self, exclude: Option<EntityId>) -> bool {
        match self {
            Self::Static(_) => false,
            Self::Dynamic(r) => r.occupants.iter().all(|o| Some(*o) == exclude),
        }
    }

    pub(crate) fn set_content(&mut self, title: String, description: String) {
        match self {
            Self::Static(r) => {
                r.title = title;
                r.description = description;
            }
            Self::Dynamic(r) => {
                r.title = title;
                r.description = description;
            }
        }
    }

    pub(crate) fn set_coordinates(&mut self, coordinates: Option<Coord>) {
        match self {
            Self::Static(r) => r.coordinates = coordinates,
            Self::Dynamic(r) => r.coordinates = coordinates,
        }
    }

    pub(crate) fn exits_mut(&mut self) -> &mut ExitList {
        match self {
            Self::Static(r) => &mut r.exits,
            Self::Dynamic(r) => &mut r.exits,
        }
    }

    /// Add an occupant; no-op if already inside.
    pub(crate) fn admit(&mut self, entity: EntityId) {
        let occupants = match self {
            Self::Static(r) => &mut r.occupants,
            Self::Dynamic(r) => &mut r.occupants,
        };
        if !occupants.contains(&entity) {
            occupants.push(entity);
        }
    }

    /// Remove an occupant. Returns whether it was inside.
    pub(crate) fn expel(&mut self, entity: EntityId) -> bool {
        let occupants = match self {
            Self::Static(r) => &mut r.occupants,
            Self::Dynamic(r) => &mut r.occupants,
        };
        match occupants.iter().position(|o| *o == entity) {
            Some(i) => {
                occupants.remove(i);
                true
            }
            None => false,
        }
    }
}

impl Recycle for Location {
    /// Dynamic rooms drop their content and coordinate but keep their
    /// exits. Static rooms are never released.
    fn recycle(&mut self) {
        if let Self::Dynamic(r) = self {
            r.title.clear();
            r.description.clear();
            r.description.push_str(EMPTY_ROOM_DESCRIPTION);
            r.coordinates = None;
            r.occupants.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dynamic() -> Location {
        Location::Dynamic(DynamicRoom::default())
    }

    #[test]
    fn empty_dynamic_room_is_poolable() {
        assert!(dynamic().is_poolable(None));
    }

    #[test]
    fn exclusion_ignores_the_mover_only() {
        let mut room = dynamic();
        room.admit(EntityId(1));
        assert!(!room.is_poolable(None));
        assert!(room.is_poolable(Some(EntityId(1))));
        room.admit(EntityId(2));
        assert!(!room.is_poolable(Some(EntityId(1))));
    }

    #[test]
    fn exits_do_not_block_pooling() {
        let mut room = dynamic();
        room.exits_mut().push(ExitRef {
            index: 0,
            generation: 0,
        });
        assert!(room.is_poolable(None));
    }

    #[test]
    fn static_room_is_never_poolable() {
        let room = Location::Static(StaticRoom::new("k", "T", "D", "area"));
        assert!(!room.is_poolable(None));
    }

    #[test]
    fn admit_is_idempotent_and_expel_reports() {
        let mut room = dynamic();
        room.admit(EntityId(3));
        room.admit(EntityId(3));
        assert_eq!(room.occupants(), &[EntityId(3)]);
        assert!(room.expel(EntityId(3)));
        assert!(!room.expel(EntityId(3)));
    }

    #[test]
    fn recycle_keeps_exits() {
        let mut room = dynamic();
        room.set_content("Pianura".to_string(), "PianuraDesc1".to_string());
        room.set_coordinates(Some(Coord::new(1, 1)));
        room.exits_mut().push(ExitRef {
            index: 4,
            generation: 2,
        });
        room.recycle();
        assert_eq!(room.title(), "");
        assert_eq!(room.description(), EMPTY_ROOM_DESCRIPTION);
        assert_eq!(room.coordinates(), None);
        assert_eq!(room.exits().len(), 1);
    }

    #[test]
    fn area_falls_back_to_wild() {
        assert_eq!(dynamic().area("wild"), "wild");
        let s = Location::Static(StaticRoom::new("k", "T", "D", "grotte"));
        assert_eq!(s.area("wild"), "grotte");
    }
}
