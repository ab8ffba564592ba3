//! Simulation clock updates.

use bevy_ecs::prelude::World;

use crate::resources::worldtime::WorldTime;

/// Feed one frame's wall-clock delta into the simulation clock.
///
/// While paused the delta is zeroed, so every delta-driven system freezes
/// without losing its state.
pub fn update_world_time(world: &mut World, frame_delta: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    if time.paused {
        time.delta = 0.0;
    } else {
        time.delta = frame_delta * time.time_scale;
        let delta = time.delta;
        time.elapsed += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_time_zeroes_delta_and_holds_elapsed() {
        let mut world = World::new();
        world.init_resource::<WorldTime>();
        update_world_time(&mut world, 0.016);
        assert!(world.resource::<WorldTime>().elapsed > 0.0);
        let elapsed = world.resource::<WorldTime>().elapsed;

        world.resource_mut::<WorldTime>().paused = true;
        update_world_time(&mut world, 0.016);
        let time = world.resource::<WorldTime>();
        assert_eq!(time.delta, 0.0);
        assert_eq!(time.elapsed, elapsed);
    }

    #[test]
    fn time_scale_multiplies_delta() {
        let mut world = World::new();
        world.init_resource::<WorldTime>();
        world.resource_mut::<WorldTime>().time_scale = 2.0;
        update_world_time(&mut world, 0.5);
        assert_eq!(world.resource::<WorldTime>().delta, 1.0);
    }
}
