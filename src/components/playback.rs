use std::sync::Arc;

use bevy_ecs::prelude::Component;

/// Animation playback state of one instance.
///
/// `current` names an animation declared on the instance's owning spec;
/// `cursor` indexes into that animation's frame list, not the sheet. The
/// sheet frame shown while stopped is `stop_frame` (0 by default).
#[derive(Component, Clone, Debug)]
pub struct Playback {
    /// Animation currently playing, if any.
    pub current: Option<Arc<str>>,
    /// Index into the current animation's frame sequence.
    pub cursor: usize,
    /// Seconds accumulated toward the next frame advance.
    pub elapsed: f32,
    /// Sheet frame displayed when playback is stopped.
    pub stop_frame: usize,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            current: None,
            cursor: 0,
            elapsed: 0.0,
            stop_frame: 0,
        }
    }
}

impl Playback {
    /// Begin playing `animation` from its first frame. Re-playing the
    /// animation that is already running keeps its position.
    pub fn start(&mut self, animation: Arc<str>) {
        if self.current.as_deref() == Some(animation.as_ref()) {
            return;
        }
        self.current = Some(animation);
        self.cursor = 0;
        self.elapsed = 0.0;
    }

    /// Halt playback. The caller is responsible for showing `stop_frame`.
    pub fn halt(&mut self) {
        self.current = None;
        self.cursor = 0;
        self.elapsed = 0.0;
    }
}
