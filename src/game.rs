//! World bootstrap and stage-level operations.
//!
//! [`init_world`] builds an ECS [`World`] carrying every resource the rest
//! of the crate expects, sized from a [`GameConfig`]. Stage-level helpers
//! cover what isn't tied to one sprite: image loading, the background,
//! draw-order swaps, and the pause switch. Audio setup lives in
//! [`crate::resources::audio::setup_audio`] because it hands a channel
//! receiver back to the host.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::World;

use crate::backend::InputBackend;
use crate::error::EngineError;
use crate::events::animation::AnimationFinished;
use crate::events::button::ButtonInput;
use crate::resources::animationstore::AnimationStore;
use crate::resources::backgroundstore::BackgroundStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::imagestore::{ImageInfo, ImageStore};
use crate::resources::input::{InputBridge, InputState};
use crate::resources::renderorder::RenderOrder;
use crate::resources::spritestore::SpriteStore;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;
use crate::sprites::SpriteKey;

/// Build a world with every engine resource in place.
///
/// The config's world dimensions become the [`WorldBounds`] that percentage
/// coordinates resolve against.
pub fn init_world(config: GameConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldBounds {
        width: config.world_width as f32,
        height: config.world_height as f32,
    });
    world.insert_resource(config);
    world.init_resource::<SpriteStore>();
    world.init_resource::<AnimationStore>();
    world.init_resource::<ImageStore>();
    world.init_resource::<BackgroundStore>();
    world.init_resource::<RenderOrder>();
    world.init_resource::<WorldTime>();
    world.init_resource::<InputState>();
    world.init_resource::<Messages<AnimationFinished>>();
    world.init_resource::<Messages<ButtonInput>>();
    world
}

/// Hand the host's input device to the world.
pub fn set_input_backend(world: &mut World, backend: Box<dyn InputBackend>) {
    world.insert_resource(InputBridge { backend });
}

/// Record an image the host render backend has cached, so sprites and
/// backgrounds can size themselves against it.
pub fn load_image(world: &mut World, key: &str, path: &str, width: u32, height: u32) {
    world.resource_mut::<ImageStore>().insert(
        key,
        ImageInfo {
            path: path.to_owned(),
            width,
            height,
        },
    );
}

/// Record a background image and register its key. Registration fails if
/// the key is already taken.
pub fn load_background_image(
    world: &mut World,
    key: &str,
    path: &str,
    width: u32,
    height: u32,
) -> Result<(), EngineError> {
    world.resource_mut::<BackgroundStore>().register(key)?;
    load_image(world, key, path, width, height);
    Ok(())
}

/// Show a registered background. `width`/`height` of `None` use the image's
/// natural dimensions.
pub fn set_background_image(
    world: &mut World,
    key: &str,
    width: Option<f32>,
    height: Option<f32>,
    x: f32,
    y: f32,
) -> Result<(), EngineError> {
    world.resource_scope(|world, mut backgrounds: bevy_ecs::prelude::Mut<BackgroundStore>| {
        backgrounds.activate(key, world.resource::<ImageStore>(), width, height, x, y)
    })
}

/// Fallback colour drawn when no background image is active, e.g. `#000000`.
pub fn set_background_colour(world: &mut World, colour: &str) {
    world.resource_mut::<BackgroundStore>().colour = Some(colour.to_owned());
}

/// Scroll the active background horizontally by `dx` pixels.
pub fn scroll_background_x(world: &mut World, dx: f32) {
    world.resource_mut::<BackgroundStore>().scroll_x(dx);
}

/// Scroll the active background vertically by `dy` pixels.
pub fn scroll_background_y(world: &mut World, dy: f32) {
    world.resource_mut::<BackgroundStore>().scroll_y(dy);
}

/// Freeze simulation time. Animation and movement hold their state until
/// [`resume`].
pub fn pause(world: &mut World) {
    world.resource_mut::<WorldTime>().paused = true;
}

/// Resume simulation time.
pub fn resume(world: &mut World) {
    world.resource_mut::<WorldTime>().paused = false;
}

pub fn is_paused(world: &World) -> bool {
    world.resource::<WorldTime>().paused
}

/// Exchange the draw indices of two specs. Everything else keeps its depth.
pub fn swap(world: &mut World, a: &SpriteKey, b: &SpriteKey) -> Result<(), EngineError> {
    world.resource_mut::<RenderOrder>().swap(a.name(), b.name())
}

/// World width in pixels.
pub fn game_width(world: &World) -> f32 {
    world.resource::<WorldBounds>().width
}

/// World height in pixels.
pub fn game_height(world: &World) -> f32 {
    world.resource::<WorldBounds>().height
}
