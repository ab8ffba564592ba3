//! World bounds resource.
//!
//! Stores the world dimensions in pixels. The coordinate resolver scales
//! percentage inputs against these extents during spawn and resize.

use bevy_ecs::prelude::Resource;

/// World dimensions in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}
