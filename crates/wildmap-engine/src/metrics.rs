//! Cumulative counters for the world engine.
//!
//! [`EngineMetrics`] is updated in place by every movement and lifecycle
//! operation; consumers read a copy through
//! [`WorldEngine::metrics`](crate::WorldEngine::metrics).

/// Cumulative engine counters since construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineMetrics {
    /// Moves that completed (including detaches to nowhere).
    pub moves: u64,
    /// Moves rejected with any [`MoveError`](wildmap_core::MoveError).
    pub rejected_moves: u64,
    /// Moves into an already-active location.
    pub merges: u64,
    /// Moves that re-keyed the entity's own poolable location.
    pub reused_in_place: u64,
    /// Dynamic locations handed out from the room pool.
    pub room_pool_hits: u64,
    /// Dynamic locations created because the room pool was empty.
    pub room_pool_misses: u64,
    /// Exits handed out from the exit garage.
    pub exit_pool_hits: u64,
    /// Exits created because the exit garage was empty.
    pub exit_pool_misses: u64,
    /// Dynamic locations returned to the room pool.
    pub evictions: u64,
    /// Hook calls that returned an error.
    pub hook_failures: u64,
    /// Materializations undone after a pre-relocation hook failed.
    pub rollbacks: u64,
}
