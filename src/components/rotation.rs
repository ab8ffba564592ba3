use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Display angle in degrees, clockwise.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub degrees: f32,
}
