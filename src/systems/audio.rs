//! Audio command forwarding.

use bevy_ecs::message::{MessageReader, Messages};
use bevy_ecs::prelude::{Res, ResMut};

use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBridge;

/// Drain queued audio commands into the host channel.
///
/// A closed channel means the host audio consumer is gone; commands are
/// dropped silently in that case.
pub fn forward_audio_cmds(mut reader: MessageReader<AudioCmd>, bridge: Res<AudioBridge>) {
    for cmd in reader.read() {
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Per-frame pump for the audio command queue.
pub fn update_audio_messages(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}
