//! Audio command bridge.
//!
//! The crate never touches an audio device. Game code creates [`Sound`]
//! handles that write [`AudioCmd`] messages into the ECS queue;
//! [`forward_audio_cmds`](crate::systems::audio::forward_audio_cmds) drains
//! the queue into a crossbeam channel whose receiver belongs to the host's
//! audio thread or device. Use [`setup_audio`] once during initialization
//! and hand the returned receiver to the host.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::AudioCmd;

/// Shared bridge between the ECS world and the host audio consumer.
///
/// Systems forward commands through `tx_cmd`; the matching receiver is
/// returned by [`setup_audio`].
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio consumer).
    pub tx_cmd: Sender<AudioCmd>,
    counter: u64,
}

impl AudioBridge {
    fn generate_id(&mut self) -> Arc<str> {
        self.counter += 1;
        Arc::from(format!("Sound{}", self.counter))
    }
}

/// Create the command channel and register the bridge resources.
///
/// Returns the receiver the host audio device should drain. Also
/// initializes `Messages<AudioCmd>` so systems and [`Sound`] handles can
/// write commands.
pub fn setup_audio(world: &mut World) -> Receiver<AudioCmd> {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    world.insert_resource(AudioBridge { tx_cmd, counter: 0 });
    world.init_resource::<Messages<AudioCmd>>();
    rx_cmd
}

/// Ask the host audio consumer to shut down.
pub fn shutdown_audio(world: &mut World) {
    write_cmd(world, AudioCmd::Shutdown);
}

fn write_cmd(world: &mut World, cmd: AudioCmd) {
    world.resource_mut::<Messages<AudioCmd>>().write(cmd);
}

/// Handle to one loaded sound.
///
/// Loading assigns a generated `Sound{n}` id and forwards the volume and
/// loop flags; playback control is fire-and-forget through the command
/// queue. Multiple simultaneous plays are allowed by default.
#[derive(Debug, Clone)]
pub struct Sound {
    id: Arc<str>,
}

impl Sound {
    /// Load a sound file. `volume` is 0.0..=1.0 and defaults should be 1.0;
    /// `looped` restarts the sound when it ends.
    pub fn load(world: &mut World, path: impl Into<String>, volume: f32, looped: bool) -> Self {
        let id = world.resource_mut::<AudioBridge>().generate_id();
        write_cmd(
            world,
            AudioCmd::Load {
                id: Arc::clone(&id),
                path: path.into(),
                volume,
                looped,
            },
        );
        // Overlapping plays are allowed unless the game opts out.
        let sound = Self { id };
        sound.allow_multiple(world, true);
        sound
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn play(&self, world: &mut World) {
        write_cmd(world, AudioCmd::Play { id: Arc::clone(&self.id) });
    }

    pub fn pause(&self, world: &mut World) {
        write_cmd(world, AudioCmd::Pause { id: Arc::clone(&self.id) });
    }

    pub fn resume(&self, world: &mut World) {
        write_cmd(world, AudioCmd::Resume { id: Arc::clone(&self.id) });
    }

    pub fn restart(&self, world: &mut World) {
        write_cmd(world, AudioCmd::Restart { id: Arc::clone(&self.id) });
    }

    pub fn stop(&self, world: &mut World) {
        write_cmd(world, AudioCmd::Stop { id: Arc::clone(&self.id) });
    }

    pub fn set_volume(&self, world: &mut World, volume: f32) {
        write_cmd(
            world,
            AudioCmd::SetVolume {
                id: Arc::clone(&self.id),
                volume,
            },
        );
    }

    pub fn allow_multiple(&self, world: &mut World, allow: bool) {
        write_cmd(
            world,
            AudioCmd::AllowMultiple {
                id: Arc::clone(&self.id),
                allow,
            },
        );
    }
}
