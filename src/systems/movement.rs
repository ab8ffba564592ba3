//! Velocity integration.

use bevy_ecs::prelude::{Query, Res};

use crate::components::position::Position;
use crate::components::velocity::Velocity;
use crate::resources::worldtime::WorldTime;

/// Integrate velocity into position, scaled by the frame delta. Does
/// nothing while time is paused.
pub fn apply_velocity(time: Res<WorldTime>, mut query: Query<(&mut Position, &Velocity)>) {
    if time.delta == 0.0 {
        return;
    }
    for (mut position, velocity) in query.iter_mut() {
        position.x += velocity.x * time.delta;
        position.y += velocity.y * time.delta;
    }
}
