use std::sync::Arc;

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

/// Pointer events a button can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonTrigger {
    /// Primary button released over the button.
    Up,
    /// Primary button pressed over the button.
    Down,
    /// Cursor entered the button's bounds.
    Over,
    /// Cursor left the button's bounds.
    Out,
}

/// Action map for a clickable sprite instance.
///
/// Each trigger may be wired to an action animation on the button's sprite
/// spec (a frame swap, typically single-frame at 10 fps). Wiring happens
/// through [`crate::buttons`]; [`apply_button_actions`] plays the mapped
/// animation when the trigger fires.
///
/// [`apply_button_actions`]: crate::systems::button::apply_button_actions
#[derive(Component, Debug, Clone, Default)]
pub struct Button {
    /// Unique button name, used to prefix its action animation names.
    pub name: Arc<str>,
    /// Trigger to action-animation mapping.
    pub actions: FxHashMap<ButtonTrigger, Arc<str>>,
}

impl Button {
    pub fn new(name: Arc<str>) -> Self {
        Self {
            name,
            actions: FxHashMap::default(),
        }
    }
}

/// Per-frame pointer state of a button, updated by
/// [`pointer_buttons`](crate::systems::button::pointer_buttons) to detect
/// Over/Out/Down/Up edges.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ButtonState {
    /// Cursor was inside the bounds last poll.
    pub hovered: bool,
    /// Primary button was held over this button last poll.
    pub pressed: bool,
}
