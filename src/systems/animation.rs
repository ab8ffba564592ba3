//! Animation playback.

use std::sync::Arc;

use bevy_ecs::message::{MessageWriter, Messages};
use bevy_ecs::prelude::{Entity, Query, Res, ResMut};

use crate::components::playback::Playback;
use crate::components::sprite::Sprite;
use crate::events::animation::AnimationFinished;
use crate::resources::animationstore::AnimationStore;
use crate::resources::imagestore::ImageStore;
use crate::resources::spritestore::SpriteStore;
use crate::resources::worldtime::WorldTime;
use crate::sprites::frame_offset;

/// Advance every playing animation by the frame delta and point each
/// sprite's sheet offset at its current frame.
///
/// Animations are looked up by name at play time, so one declared after its
/// instances were spawned still plays. A non-looping animation that runs
/// past its last frame halts and writes [`AnimationFinished`].
pub fn advance_animations(
    time: Res<WorldTime>,
    sprites: Res<SpriteStore>,
    animations: Res<AnimationStore>,
    images: Res<ImageStore>,
    mut query: Query<(Entity, &mut Playback, &mut Sprite)>,
    mut finished: MessageWriter<AnimationFinished>,
) {
    if time.delta == 0.0 {
        return;
    }
    for (entity, mut playback, mut sprite) in query.iter_mut() {
        let Some(current) = playback.current.clone() else {
            continue;
        };
        let Some(animation) = animations.get(&sprite.spec, &current) else {
            continue;
        };
        if animation.frames.is_empty() {
            continue;
        }

        playback.elapsed += time.delta;
        let frame_duration = 1.0 / animation.fps;
        while playback.elapsed >= frame_duration {
            playback.elapsed -= frame_duration;
            if playback.cursor + 1 < animation.frames.len() {
                playback.cursor += 1;
            } else if animation.looped {
                playback.cursor = 0;
            } else {
                finished.write(AnimationFinished {
                    entity,
                    animation: Arc::clone(&current),
                });
                playback.halt();
                break;
            }
        }

        let frame = match playback.current {
            Some(_) => animation.frames[playback.cursor],
            None => playback.stop_frame,
        };
        if let Ok(spec) = sprites.get(&sprite.spec) {
            if let Ok(offset) = frame_offset(spec, &images, frame) {
                sprite.offset = offset;
            }
        }
    }
}

/// Per-frame pump for the finished-animation queue.
pub fn update_animation_messages(mut messages: ResMut<Messages<AnimationFinished>>) {
    messages.update();
}
