use std::sync::Arc;

use bevy_ecs::prelude::Component;

/// Visible sprite state of one instance.
///
/// `spec` names the owning [`SpriteSpec`](crate::resources::spritestore::SpriteSpec);
/// `offset` is the top-left pixel of the current frame inside the sprite
/// sheet and is written by the animation system. Renderers draw the
/// `width`×`height` region of the spec's image starting at `offset`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    /// Key of the owning sprite spec in the sprite store.
    pub spec: Arc<str>,
    /// Display width in pixels.
    pub width: f32,
    /// Display height in pixels.
    pub height: f32,
    /// Top-left corner of the current frame within the sheet, in pixels.
    pub offset: (f32, f32),
    /// Whether the instance should be drawn at all.
    pub visible: bool,
}

impl Sprite {
    pub fn new(spec: Arc<str>, width: f32, height: f32) -> Self {
        Self {
            spec,
            width,
            height,
            offset: (0.0, 0.0),
            visible: true,
        }
    }
}
