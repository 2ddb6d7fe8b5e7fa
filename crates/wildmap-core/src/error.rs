//! Error types for the wildmap world engine.
//!
//! Organized by subsystem: movement (the orchestrator), world lifecycle
//! (registry and room management), and the hook contract shared with
//! external collaborators. Terrain, arena and configuration errors live
//! in their own crates.

use std::error::Error;
use std::fmt;

use crate::id::Coord;

/// Text shown to a player when a move is rejected for lack of a path.
const CANT_GO_THERE: &str = "Non puoi andare qui.";

/// The point in the move sequence at which an external hook failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookStage {
    /// The entity's pre-move veto hook.
    PreMove,
    /// The old location's leaving hook.
    Leaving,
    /// The entity's departure announcement.
    Departure,
    /// The entity's arrival announcement.
    Arrival,
    /// The new location's arrival hook.
    Arrived,
    /// The entity's post-move hook.
    PostMove,
}

impl HookStage {
    /// Whether this stage runs after the entity has been relocated.
    pub fn is_after_commit(self) -> bool {
        matches!(self, Self::Arrival | Self::Arrived | Self::PostMove)
    }
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PreMove => "pre_move",
            Self::Leaving => "on_entity_leaving",
            Self::Departure => "announce_departure",
            Self::Arrival => "announce_arrival",
            Self::Arrived => "on_entity_arrived",
            Self::PostMove => "post_move",
        };
        f.write_str(s)
    }
}

/// Failure reported by an external hook implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HookError {
    /// Human-readable description of the failure.
    pub reason: String,
}

impl HookError {
    /// Create a hook error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl Error for HookError {}

/// Errors from the movement orchestrator.
///
/// Every variant is recoverable: the engine stays usable for subsequent
/// moves. Apart from [`HookFailure`](MoveError::HookFailure) with
/// `committed: true`, the entity's location is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// No target coordinate was given and moving to nowhere was not allowed.
    NoDestination,
    /// The target coordinate is not on the terrain grid.
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
    },
    /// The entity is already in the location registered at the target.
    AlreadyThere,
    /// A direction key did not name a cardinal direction, or the current
    /// location has no exit in that direction.
    UnknownDirection {
        /// The key as given by the caller.
        key: String,
    },
    /// The entity's pre-move hook declined the move.
    VetoedMove,
    /// An external hook failed.
    HookFailure {
        /// Which hook failed.
        stage: HookStage,
        /// The hook's own description of the failure.
        reason: String,
        /// Whether the entity had already been relocated when the hook
        /// failed. When `false`, every mutation made for this move has
        /// been rolled back.
        committed: bool,
    },
    /// Pool or registry misuse detected mid-move. Unreachable in a
    /// correct build.
    InvariantViolation {
        /// What was violated.
        detail: String,
    },
}

impl MoveError {
    /// The rejection text to show the moving player.
    ///
    /// Out-of-bounds and unknown-direction rejections are indistinguishable
    /// from the player's point of view.
    pub fn player_message(&self) -> &'static str {
        match self {
            Self::NoDestination => "La destinazione non esiste.",
            Self::AlreadyThere => "Non puoi andare dove sei già!",
            Self::OutOfBounds { .. } | Self::UnknownDirection { .. } => CANT_GO_THERE,
            Self::VetoedMove | Self::HookFailure { .. } | Self::InvariantViolation { .. } => {
                CANT_GO_THERE
            }
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDestination => write!(f, "no destination given"),
            Self::OutOfBounds { coord } => write!(f, "coordinate {coord} is out of bounds"),
            Self::AlreadyThere => write!(f, "entity is already at the destination"),
            Self::UnknownDirection { key } => write!(f, "unknown direction '{key}'"),
            Self::VetoedMove => write!(f, "move vetoed by the entity"),
            Self::HookFailure {
                stage,
                reason,
                committed,
            } => {
                write!(f, "hook {stage} failed: {reason}")?;
                if *committed {
                    write!(f, " (after relocation)")?;
                }
                Ok(())
            }
            Self::InvariantViolation { detail } => write!(f, "invariant violation: {detail}"),
        }
    }
}

impl Error for MoveError {}

/// Errors from registry and room lifecycle operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorldError {
    /// The coordinate already has an active location.
    AlreadyOccupied {
        /// The occupied coordinate.
        coord: Coord,
    },
    /// The coordinate is not on the terrain grid.
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
    },
    /// A room or exit handle refers to a slot that has since been recycled.
    StaleHandle,
    /// The exit key cannot be attached here: cardinal keys on a dynamic
    /// location, or a direction the location already has.
    ReservedExitKey {
        /// The rejected key.
        key: String,
    },
    /// Pool or registry misuse. Unreachable in a correct build.
    InvariantViolation {
        /// What was violated.
        detail: String,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOccupied { coord } => {
                write!(f, "coordinate {coord} already has an active location")
            }
            Self::OutOfBounds { coord } => write!(f, "coordinate {coord} is out of bounds"),
            Self::StaleHandle => write!(f, "stale room or exit handle"),
            Self::ReservedExitKey { key } => {
                write!(f, "exit key '{key}' is reserved on this location")
            }
            Self::InvariantViolation { detail } => write!(f, "invariant violation: {detail}"),
        }
    }
}

impl Error for WorldError {}

impl From<WorldError> for MoveError {
    fn from(e: WorldError) -> Self {
        match e {
            WorldError::OutOfBounds { coord } => Self::OutOfBounds { coord },
            other => Self::InvariantViolation {
                detail: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_and_unknown_direction_read_the_same() {
        let a = MoveError::OutOfBounds {
            coord: Coord::new(-100, -100),
        };
        let b = MoveError::UnknownDirection {
            key: "su".to_string(),
        };
        assert_eq!(a.player_message(), b.player_message());
    }

    #[test]
    fn hook_failure_display_mentions_stage() {
        let e = MoveError::HookFailure {
            stage: HookStage::Arrived,
            reason: "boom".to_string(),
            committed: true,
        };
        assert_eq!(
            e.to_string(),
            "hook on_entity_arrived failed: boom (after relocation)"
        );
    }

    #[test]
    fn stages_after_commit() {
        assert!(!HookStage::PreMove.is_after_commit());
        assert!(!HookStage::Leaving.is_after_commit());
        assert!(!HookStage::Departure.is_after_commit());
        assert!(HookStage::Arrival.is_after_commit());
        assert!(HookStage::Arrived.is_after_commit());
        assert!(HookStage::PostMove.is_after_commit());
    }

    #[test]
    fn world_error_converts_to_move_error() {
        let coord = Coord::new(1, 2);
        assert_eq!(
            MoveError::from(WorldError::OutOfBounds { coord }),
            MoveError::OutOfBounds { coord }
        );
        assert!(matches!(
            MoveError::from(WorldError::StaleHandle),
            MoveError::InvariantViolation { .. }
        ));
    }
}
