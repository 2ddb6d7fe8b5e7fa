//! Process-wide engine instance with an explicit lifecycle.
//!
//! One wilderness per process. [`initialize`] loads the persisted state
//! from a [`WorldStore`] and reattaches to it, or starts empty; calling it
//! again while running is a no-op. [`shutdown`] hands the state back to
//! the store. Every operation in between runs under a single lock through
//! [`with_world`].

use std::error::Error;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};
use wildmap_terrain::TerrainGrid;

use crate::config::{ConfigError, WorldConfig};
use crate::store::WorldStore;
use crate::world::WorldEngine;

static WORLD: Mutex<Option<WorldEngine>> = Mutex::new(None);

fn world() -> MutexGuard<'static, Option<WorldEngine>> {
    // A panic inside `with_world` leaves the engine as the panicking
    // operation left it; keep serving it.
    WORLD.lock().unwrap_or_else(PoisonError::into_inner)
}

/// How [`initialize`] obtained the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Startup {
    /// The store was empty; a fresh engine was built.
    Created,
    /// A saved state was found and reattached.
    Reattached,
    /// An engine was already running; nothing changed.
    AlreadyRunning,
}

/// Errors from the process-wide lifecycle.
#[derive(Debug)]
pub enum InitError {
    /// The terrain or configuration was rejected.
    Config(ConfigError),
    /// No engine is running.
    NotInitialized,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::NotInitialized => write!(f, "world engine is not initialized"),
        }
    }
}

impl Error for InitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::NotInitialized => None,
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Start the process-wide engine from a terrain file, reattaching to the
/// state saved in `store` if there is one.
///
/// A malformed terrain file is fatal: no engine is installed.
pub fn initialize(
    terrain_bytes: &[u8],
    config: WorldConfig,
    store: &mut dyn WorldStore,
) -> Result<Startup, InitError> {
    let mut slot = world();
    if slot.is_some() {
        debug!("world engine already running");
        return Ok(Startup::AlreadyRunning);
    }
    let terrain = TerrainGrid::load(terrain_bytes).map_err(ConfigError::from)?;
    let (engine, startup) = match store.load() {
        Some(state) => (WorldEngine::attach(terrain, config, state)?, Startup::Reattached),
        None => (WorldEngine::new(terrain, config)?, Startup::Created),
    };
    *slot = Some(engine);
    Ok(startup)
}

/// Whether an engine is running.
pub fn is_initialized() -> bool {
    world().is_some()
}

/// Run `f` against the running engine.
pub fn with_world<R>(f: impl FnOnce(&mut WorldEngine) -> R) -> Result<R, InitError> {
    let mut slot = world();
    let engine = slot.as_mut().ok_or(InitError::NotInitialized)?;
    Ok(f(engine))
}

/// Stop the running engine and save its state. Returns `false` if none
/// was running.
pub fn shutdown(store: &mut dyn WorldStore) -> bool {
    let Some(engine) = world().take() else {
        return false;
    };
    let state = engine.into_state();
    info!(active = state.registry().len(), "world engine shut down");
    store.save(state);
    true
}
