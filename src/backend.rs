//! External collaborator traits.
//!
//! The crate never talks to a window, an input device, or a browser cookie
//! jar directly. Hosts implement these traits and hand them in during world
//! setup; everything behind them is out of scope here.

use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::resources::input::KeyCode;

/// Input device queries, polled once per frame by
/// [`poll_input`](crate::systems::input::poll_input).
pub trait InputBackend: Send + Sync {
    /// Whether the given key is currently held down.
    fn is_key_down(&self, key: KeyCode) -> bool;
    /// Cursor position in world pixels.
    fn mouse_position(&self) -> (f32, f32);
    /// Whether the primary mouse button is currently held down.
    fn is_mouse_down(&self) -> bool;
}

/// Synchronous string key-value persistence, the cookie-equivalent used by
/// [`HighScoreBoard`](crate::highscore::HighScoreBoard). One read or write
/// per call, nothing held across calls.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `name`, if any.
    fn read(&self, name: &str) -> Option<String>;
    /// Write `value` under `name`. The store may drop the entry after `ttl`.
    fn write(&mut self, name: &str, value: &str, ttl: Duration);
}

/// In-memory [`KeyValueStore`]. Ignores TTLs; entries live as long as the
/// store does. Used by tests and useful as a default for hosts without
/// persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, name: &str) -> Option<String> {
        self.map.get(name).cloned()
    }

    fn write(&mut self, name: &str, value: &str, _ttl: Duration) {
        self.map.insert(name.to_owned(), value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("scores"), None);
        store.write("scores", "[]", Duration::from_secs(1));
        assert_eq!(store.read("scores").as_deref(), Some("[]"));
        store.write("scores", "[1]", Duration::from_secs(1));
        assert_eq!(store.read("scores").as_deref(), Some("[1]"));
    }
}
