//! Input polling and edge detection.

use bevy_ecs::prelude::{Res, ResMut};

use crate::resources::input::{InputBridge, InputState};

/// Poll the host input device for every tracked key and the mouse, deriving
/// the `just_pressed` / `just_released` edges by comparing against the
/// previous poll. Run once per frame, before any system that reads input.
pub fn poll_input(bridge: Res<InputBridge>, mut input: ResMut<InputState>) {
    for (key, state) in input.keys_mut() {
        let down = bridge.backend.is_key_down(*key);
        state.just_pressed = down && !state.down;
        state.just_released = !down && state.down;
        state.down = down;
    }

    let (x, y) = bridge.backend.mouse_position();
    let down = bridge.backend.is_mouse_down();
    let mouse = &mut input.mouse;
    mouse.x = x;
    mouse.y = y;
    mouse.just_pressed = down && !mouse.down;
    mouse.just_released = !down && mouse.down;
    mouse.down = down;
}
