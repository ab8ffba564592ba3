use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::components::button::ButtonTrigger;

/// A pointer trigger detected on a button by
/// [`pointer_buttons`](crate::systems::button::pointer_buttons).
///
/// [`apply_button_actions`](crate::systems::button::apply_button_actions)
/// plays the wired frame-swap animation; game code subscribes to the same
/// messages for its own reactions.
#[derive(Message, Debug, Clone, Copy)]
pub struct ButtonInput {
    /// The button entity the trigger fired on.
    pub target: Entity,
    /// Which pointer edge fired.
    pub trigger: ButtonTrigger,
}
