use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Velocity in pixels per second, integrated into
/// [`Position`](super::position::Position) by
/// [`apply_velocity`](crate::systems::movement::apply_velocity).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
