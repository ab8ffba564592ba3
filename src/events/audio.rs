use std::sync::Arc;

use bevy_ecs::message::Message;

/// Commands sent *to* the host audio consumer.
///
/// These mirror the playback surface a game script can reach: load with
/// initial volume and loop flags, transport control, and the
/// allow-multiple toggle for overlapping plays.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    Load {
        id: Arc<str>,
        path: String,
        volume: f32,
        looped: bool,
    },
    Play { id: Arc<str> },
    Pause { id: Arc<str> },
    Resume { id: Arc<str> },
    Restart { id: Arc<str> },
    Stop { id: Arc<str> },
    SetVolume { id: Arc<str>, volume: f32 },
    AllowMultiple { id: Arc<str>, allow: bool },
    Shutdown,
}
