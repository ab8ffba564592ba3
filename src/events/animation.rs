use std::sync::Arc;

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// Written when a non-looping animation reaches its last frame.
///
/// Looping animations never finish. Subscribe with a
/// `MessageReader<AnimationFinished>` to run completion actions.
#[derive(Message, Debug, Clone)]
pub struct AnimationFinished {
    /// The instance whose animation ended.
    pub entity: Entity,
    /// Name of the animation that ended.
    pub animation: Arc<str>,
}
