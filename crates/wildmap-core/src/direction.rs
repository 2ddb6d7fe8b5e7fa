//! The four cardinal directions and their stable key/alias mapping.

use std::fmt;

use crate::error::MoveError;

/// A cardinal direction on the wilderness grid.
///
/// The key strings and deltas are part of the engine's external interface
/// and must not change: `nord → (0,+1)`, `est → (+1,0)`, `sud → (0,-1)`,
/// `ovest → (-1,0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// North, `y + 1`.
    Nord,
    /// East, `x + 1`.
    Est,
    /// South, `y - 1`.
    Sud,
    /// West, `x - 1`.
    Ovest,
}

impl Direction {
    /// All cardinal directions in canonical exit order.
    pub const ALL: [Direction; 4] = [
        Direction::Nord,
        Direction::Est,
        Direction::Sud,
        Direction::Ovest,
    ];

    /// The full key of this direction, as used for exit names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Nord => "nord",
            Self::Est => "est",
            Self::Sud => "sud",
            Self::Ovest => "ovest",
        }
    }

    /// The one-letter alias of this direction.
    pub fn alias(self) -> &'static str {
        match self {
            Self::Nord => "n",
            Self::Est => "e",
            Self::Sud => "s",
            Self::Ovest => "o",
        }
    }

    /// `(dx, dy)` for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Nord => (0, 1),
            Self::Est => (1, 0),
            Self::Sud => (0, -1),
            Self::Ovest => (-1, 0),
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Nord => 0,
            Self::Est => 1,
            Self::Sud => 2,
            Self::Ovest => 3,
        }
    }

    /// Resolve a key or alias to a direction.
    ///
    /// Matching is exact (keys are lowercase). Anything else fails with
    /// [`MoveError::UnknownDirection`].
    pub fn parse(key: &str) -> Result<Direction, MoveError> {
        Self::ALL
            .into_iter()
            .find(|d| d.key() == key || d.alias() == key)
            .ok_or_else(|| MoveError::UnknownDirection {
                key: key.to_string(),
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
