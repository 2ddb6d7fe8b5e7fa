//! Strongly-typed identifiers and the [`Coord`] grid key.

use std::fmt;

use crate::direction::Direction;

/// A cell address on the wilderness grid.
///
/// Equality and hashing are structural. `y` grows northwards; the terrain
/// grid applies its own vertical flip when turning a coordinate into a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Horizontal component, growing eastwards.
    pub x: i32,
    /// Vertical component, growing northwards.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one step in `direction`.
    ///
    /// Returns `None` if the step would overflow `i32`; such a coordinate
    /// can never be on a grid anyway.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        Some(Coord {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifies an object that can occupy a location (a character, an item).
///
/// Allocation of entity ids belongs to the surrounding game-object store;
/// the engine only compares them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Handle to a location slot in the engine's room arena.
///
/// `index` is stable for the lifetime of the slot: a recycled dynamic
/// location keeps its index across pool cycles. `generation` is bumped
/// every time the slot goes back to the pool, so a handle taken before
/// an eviction no longer resolves afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct RoomRef {
    /// Stable slot index.
    pub index: u32,
    /// Generation of the slot when this handle was issued.
    pub generation: u32,
}

impl fmt::Display for RoomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room:{}@{}", self.index, self.generation)
    }
}

/// Handle to a connector slot in the engine's exit arena.
///
/// Same stability and generation rules as [`RoomRef`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct ExitRef {
    /// Stable slot index.
    pub index: u32,
    /// Generation of the slot when this handle was issued.
    pub generation: u32,
}

impl fmt::Display for ExitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit:{}@{}", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_follows_direction_deltas() {
        let c = Coord::new(3, 3);
        assert_eq!(c.step(Direction::Nord), Some(Coord::new(3, 4)));
        assert_eq!(c.step(Direction::Est), Some(Coord::new(4, 3)));
        assert_eq!(c.step(Direction::Sud), Some(Coord::new(3, 2)));
        assert_eq!(c.step(Direction::Ovest), Some(Coord::new(2, 3)));
    }

    #[test]
    fn step_overflow_is_none() {
        assert_eq!(Coord::new(i32::MAX, 0).step(Direction::Est), None);
        assert_eq!(Coord::new(0, i32::MIN).step(Direction::Sud), None);
    }

    #[test]
    fn coord_display() {
        assert_eq!(Coord::new(-1, 7).to_string(), "(-1, 7)");
    }

    #[test]
    fn handles_compare_by_generation() {
        let a = RoomRef {
            index: 4,
            generation: 0,
        };
        let b = RoomRef {
            index: 4,
            generation: 1,
        };
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "room:4@0");
    }
}
