use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// World-space position of an instance, in pixels from the top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
