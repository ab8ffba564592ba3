//! Tracked keyboard and mouse state.
//!
//! The host's input device sits behind the
//! [`InputBackend`](crate::backend::InputBackend) trait;
//! [`poll_input`](crate::systems::input::poll_input) queries it once per
//! frame for every tracked key and derives the `just_pressed` /
//! `just_released` edges by comparing against the previous poll. Keys must
//! be tracked explicitly before their state is meaningful.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::backend::InputBackend;

/// The host input device handed in during setup. Polled by
/// [`poll_input`](crate::systems::input::poll_input).
#[derive(Resource)]
pub struct InputBridge {
    pub backend: Box<dyn InputBackend>,
}

/// The keys the layer understands: letters, space, and the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A letter key. Stored uppercase; use [`KeyCode::letter`].
    Char(char),
    Space,
    Up,
    Down,
    Left,
    Right,
}

impl KeyCode {
    /// Key for a letter, case-insensitive.
    pub fn letter(c: char) -> Self {
        KeyCode::Char(c.to_ascii_uppercase())
    }
}

/// Boolean key state with per-frame edge flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    /// Whether the key is currently held down.
    pub down: bool,
    /// Whether the key went down this poll.
    pub just_pressed: bool,
    /// Whether the key went up this poll.
    pub just_released: bool,
}

/// Mouse cursor and primary-button state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

/// Resource holding the tracked keyboard state and the mouse state.
#[derive(Resource, Debug, Default)]
pub struct InputState {
    keys: FxHashMap<KeyCode, KeyState>,
    pub mouse: MouseState,
}

impl InputState {
    /// Start tracking a key. Untracked keys always read as up.
    pub fn track(&mut self, key: KeyCode) {
        self.keys.entry(key).or_default();
    }

    /// Track the four arrow keys and space in one call.
    pub fn track_cursor_keys(&mut self) {
        for key in [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Space,
        ] {
            self.track(key);
        }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.down)
    }

    /// True only on the poll where the key went down, so held keys fire
    /// once rather than continuously.
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.just_pressed)
    }

    pub fn just_released(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.just_released)
    }

    /// Tracked keys and their states, for the polling system.
    pub(crate) fn keys_mut(&mut self) -> impl Iterator<Item = (&KeyCode, &mut KeyState)> {
        self.keys.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_normalizes_case() {
        assert_eq!(KeyCode::letter('a'), KeyCode::letter('A'));
        assert_eq!(KeyCode::letter('z'), KeyCode::Char('Z'));
    }

    #[test]
    fn test_untracked_keys_read_up() {
        let input = InputState::default();
        assert!(!input.is_down(KeyCode::Space));
        assert!(!input.just_pressed(KeyCode::Space));
        assert!(!input.just_released(KeyCode::Space));
    }

    #[test]
    fn test_track_cursor_keys() {
        let mut input = InputState::default();
        input.track_cursor_keys();
        assert_eq!(input.keys.len(), 5);
    }
}
