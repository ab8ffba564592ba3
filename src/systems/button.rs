//! Button pointer detection and action playback.

use std::sync::Arc;

use bevy_ecs::message::{MessageReader, MessageWriter, Messages};
use bevy_ecs::prelude::{Entity, Query, Res, ResMut, With};

use crate::components::button::{Button, ButtonState, ButtonTrigger};
use crate::components::playback::Playback;
use crate::components::position::Position;
use crate::components::sprite::Sprite;
use crate::events::button::ButtonInput;
use crate::resources::input::InputState;

/// Compare the mouse against every button's bounds and write the pointer
/// edges that fired this frame.
///
/// `Up` only fires when the press started on the button and the release
/// happens inside it; dragging off the button swallows the click.
pub fn pointer_buttons(
    input: Res<InputState>,
    mut query: Query<(Entity, &Position, &Sprite, &mut ButtonState), With<Button>>,
    mut triggers: MessageWriter<ButtonInput>,
) {
    let mouse = input.mouse;
    for (entity, position, sprite, mut state) in query.iter_mut() {
        let inside = sprite.visible
            && mouse.x >= position.x
            && mouse.x < position.x + sprite.width
            && mouse.y >= position.y
            && mouse.y < position.y + sprite.height;

        if inside && !state.hovered {
            triggers.write(ButtonInput {
                target: entity,
                trigger: ButtonTrigger::Over,
            });
        }
        if !inside && state.hovered {
            triggers.write(ButtonInput {
                target: entity,
                trigger: ButtonTrigger::Out,
            });
        }
        if inside && mouse.just_pressed {
            state.pressed = true;
            triggers.write(ButtonInput {
                target: entity,
                trigger: ButtonTrigger::Down,
            });
        }
        if state.pressed && mouse.just_released {
            state.pressed = false;
            if inside {
                triggers.write(ButtonInput {
                    target: entity,
                    trigger: ButtonTrigger::Up,
                });
            }
        }
        state.hovered = inside;
    }
}

/// Play the wired action animation for each trigger written this frame.
/// Triggers with no wired action pass through for game code to observe.
pub fn apply_button_actions(
    mut reader: MessageReader<ButtonInput>,
    mut query: Query<(&Button, &mut Playback)>,
) {
    for message in reader.read() {
        let Ok((button, mut playback)) = query.get_mut(message.target) else {
            continue;
        };
        if let Some(animation) = button.actions.get(&message.trigger) {
            playback.start(Arc::clone(animation));
        }
    }
}

/// Per-frame pump for the button trigger queue.
pub fn update_button_messages(mut messages: ResMut<Messages<ButtonInput>>) {
    messages.update();
}
