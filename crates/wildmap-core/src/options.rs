//! Move options and last-known position records.

use crate::id::Coord;

/// Switches for a single move request.
///
/// The default is a normal, announced move with every hook enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOptions {
    /// Suppress the departure and arrival announcements.
    pub quiet: bool,
    /// Invoke the external lifecycle hooks. When `false` the move is a
    /// low-level relocation: no veto, no leaving/arrived/post-move hooks.
    pub run_hooks: bool,
    /// Permit moving to nowhere when no coordinate is given.
    pub to_none: bool,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            quiet: false,
            run_hooks: true,
            to_none: false,
        }
    }
}

impl MoveOptions {
    /// Options for a silent relocation with no hooks at all.
    pub fn relocation() -> Self {
        Self {
            quiet: true,
            run_hooks: false,
            to_none: false,
        }
    }

    /// Set `quiet`.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Set `run_hooks`.
    pub fn run_hooks(mut self, run_hooks: bool) -> Self {
        self.run_hooks = run_hooks;
        self
    }

    /// Set `to_none`.
    pub fn to_none(mut self, to_none: bool) -> Self {
        self.to_none = to_none;
        self
    }
}

/// The last position an entity held in a location that survives restarts.
///
/// Recorded when an entity merges into a static portal and when it is
/// stowed at logout; read back when the entity is restored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastKnown {
    /// Grid coordinate of the location.
    pub coordinates: Coord,
    /// Area tag of the location.
    pub area: String,
}
