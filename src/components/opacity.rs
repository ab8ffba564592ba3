use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Alpha transparency between 0.0 (invisible) and 1.0 (opaque).
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opacity {
    pub alpha: f32,
}

impl Default for Opacity {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}
