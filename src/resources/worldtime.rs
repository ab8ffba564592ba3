use bevy_ecs::prelude::Resource;

/// Simulation time resource.
///
/// `delta` is the scaled seconds for the current frame; it drops to 0 while
/// paused so animation and movement freeze without losing state.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds for the current frame.
    pub delta: f32,
    /// Multiplier applied to incoming frame deltas.
    pub time_scale: f32,
    /// While true, updates leave `elapsed` alone and zero `delta`.
    pub paused: bool,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            paused: false,
        }
    }
}
