//! Exits (connectors) owned by locations.

use std::fmt;

use wildmap_arena::Recycle;
use wildmap_core::{Direction, RoomRef};

/// What an exit is called.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExitKey {
    /// One of the four grid directions.
    Cardinal(Direction),
    /// Anything else, e.g. `grotta`.
    Named(String),
}

impl ExitKey {
    /// Classify a key string; direction keys and aliases become cardinal.
    pub fn from_name(name: &str) -> Self {
        match Direction::parse(name) {
            Ok(d) => Self::Cardinal(d),
            Err(_) => Self::Named(name.to_string()),
        }
    }

    /// The direction, for cardinal keys.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Cardinal(d) => Some(*d),
            Self::Named(_) => None,
        }
    }

    /// The key string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cardinal(d) => d.key(),
            Self::Named(n) => n,
        }
    }
}

impl fmt::Display for ExitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connector hanging off one location.
///
/// Cardinal exits point back at their own location: traversal resolves the
/// direction against the grid rather than following `destination`. An exit
/// whose neighbour is off the grid is locked (neither traversable nor
/// visible).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exit {
    key: ExitKey,
    origin: Option<RoomRef>,
    destination: Option<RoomRef>,
    traversable: bool,
    visible: bool,
}

impl Exit {
    /// A detached, locked exit.
    pub fn new(key: ExitKey) -> Self {
        Self {
            key,
            origin: None,
            destination: None,
            traversable: false,
            visible: false,
        }
    }

    /// The exit's key.
    pub fn key(&self) -> &ExitKey {
        &self.key
    }

    /// Owning location, `None` while garaged.
    pub fn origin(&self) -> Option<RoomRef> {
        self.origin
    }

    /// Where the exit leads.
    pub fn destination(&self) -> Option<RoomRef> {
        self.destination
    }

    /// Whether the exit may be used.
    pub fn is_traversable(&self) -> bool {
        self.traversable
    }

    /// Whether the exit is listed to occupants.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn rekey(&mut self, key: ExitKey) {
        self.key = key;
    }

    pub(crate) fn wire(&mut self, origin: RoomRef, destination: RoomRef) {
        self.origin = Some(origin);
        self.destination = Some(destination);
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.traversable = open;
        self.visible = open;
    }

    #[cfg(test)]
    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Recycle for Exit {
    fn recycle(&mut self) {
        self.origin = None;
        self.destination = None;
        self.traversable = false;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_recognises_aliases() {
        assert_eq!(ExitKey::from_name("n"), ExitKey::Cardinal(Direction::Nord));
        assert_eq!(
            ExitKey::from_name("ovest"),
            ExitKey::Cardinal(Direction::Ovest)
        );
        assert_eq!(
            ExitKey::from_name("grotta"),
            ExitKey::Named("grotta".to_string())
        );
    }

    #[test]
    fn new_exit_is_locked_and_detached() {
        let e = Exit::new(ExitKey::Cardinal(Direction::Sud));
        assert!(!e.is_traversable());
        assert!(!e.is_visible());
        assert!(e.origin().is_none());
        assert_eq!(e.key().as_str(), "sud");
    }

    #[test]
    fn recycle_detaches_and_locks() {
        let room = RoomRef {
            index: 1,
            generation: 0,
        };
        let mut e = Exit::new(ExitKey::Named("porta".to_string()));
        e.wire(room, room);
        e.set_open(true);
        e.recycle();
        assert_eq!(e, Exit::new(ExitKey::Named("porta".to_string())));
    }
}
