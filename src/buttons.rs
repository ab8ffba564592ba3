//! Clickable sprite instances.
//!
//! A button is an ordinary sprite instance with a [`Button`] action map and
//! a [`ButtonState`] attached. Pointer edges are detected by
//! [`pointer_buttons`](crate::systems::button::pointer_buttons) and published
//! as [`ButtonInput`](crate::events::button::ButtonInput) messages; wiring an
//! action declares a short frame-swap animation on the button's spec and
//! plays it when the matching trigger fires.

use std::sync::Arc;

use bevy_ecs::prelude::World;

use crate::components::button::{Button, ButtonState, ButtonTrigger};
use crate::coords::Coord;
use crate::error::EngineError;
use crate::resources::spritestore::SpriteStore;
use crate::sprites::{self, Instance, SpriteKey};

/// Action animations swap frames rather than animate, so the rate only
/// matters for multi-frame actions.
const ACTION_FPS: f32 = 10.0;

/// Handle to a created button: its backing spec and its single instance.
#[derive(Debug, Clone)]
pub struct ButtonHandle {
    pub sprite: SpriteKey,
    pub instance: Instance,
}

fn action_suffix(trigger: ButtonTrigger) -> &'static str {
    match trigger {
        ButtonTrigger::Up => "UpAction",
        ButtonTrigger::Down => "DownAction",
        ButtonTrigger::Over => "OverAction",
        ButtonTrigger::Out => "OutAction",
    }
}

/// Create a button: defines a `button{n}` spec over `image` and spawns one
/// instance at the given placement.
pub fn create_button(
    world: &mut World,
    image: &str,
    frame_width: u32,
    frame_height: u32,
    x: impl Into<Coord>,
    y: impl Into<Coord>,
    width: impl Into<Coord>,
    height: impl Into<Coord>,
) -> Result<ButtonHandle, EngineError> {
    let name = world.resource_mut::<SpriteStore>().generate_name("button");
    let sprite = sprites::define_sprite(world, image, frame_width, frame_height, Some(&name))?;
    let instance = sprites::spawn(world, &sprite, x, y, width, height)?;
    world
        .entity_mut(instance.entity)
        .insert((Button::new(sprite.arc()), ButtonState::default()));
    Ok(ButtonHandle { sprite, instance })
}

/// Wire `frames` to a pointer trigger.
///
/// Declares a `{button}UpAction`-style animation on the button's spec and
/// maps the trigger to it, replacing any earlier wiring for that trigger.
pub fn add_action(
    world: &mut World,
    button: &ButtonHandle,
    trigger: ButtonTrigger,
    frames: &[usize],
) -> Result<Arc<str>, EngineError> {
    let animation = format!("{}{}", button.sprite.name(), action_suffix(trigger));
    let animation = sprites::add_animation(world, &button.sprite, &animation, frames, ACTION_FPS, false)?;
    let mut btn = world
        .get_mut::<Button>(button.instance.entity)
        .ok_or(EngineError::InstanceDead)?;
    btn.actions.insert(trigger, Arc::clone(&animation));
    Ok(animation)
}

/// Swap to `frames` when the primary button is released over the button.
pub fn add_up_action(
    world: &mut World,
    button: &ButtonHandle,
    frames: &[usize],
) -> Result<Arc<str>, EngineError> {
    add_action(world, button, ButtonTrigger::Up, frames)
}

/// Swap to `frames` when the primary button is pressed over the button.
pub fn add_down_action(
    world: &mut World,
    button: &ButtonHandle,
    frames: &[usize],
) -> Result<Arc<str>, EngineError> {
    add_action(world, button, ButtonTrigger::Down, frames)
}

/// Swap to `frames` when the cursor enters the button.
pub fn add_over_action(
    world: &mut World,
    button: &ButtonHandle,
    frames: &[usize],
) -> Result<Arc<str>, EngineError> {
    add_action(world, button, ButtonTrigger::Over, frames)
}

/// Swap to `frames` when the cursor leaves the button.
pub fn add_out_action(
    world: &mut World,
    button: &ButtonHandle,
    frames: &[usize],
) -> Result<Arc<str>, EngineError> {
    add_action(world, button, ButtonTrigger::Out, frames)
}
