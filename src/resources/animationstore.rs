//! Animation definition registry.
//!
//! Stores the immutable frame sequences declared against sprite specs,
//! keyed by spec then animation name. Declaration and validation go through
//! [`crate::sprites::add_animation`]; playback systems look definitions up
//! here to advance frames. Because lookup happens at play time, an
//! animation declared after instances were spawned is immediately playable
//! on every live instance.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Immutable data describing one declared animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Sheet frame indices played in order. May repeat frames.
    pub frames: Vec<usize>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

/// Registry of animations declared on sprite specs.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    animations: FxHashMap<Arc<str>, FxHashMap<Arc<str>, AnimationResource>>,
}

impl AnimationStore {
    pub fn insert(&mut self, spec: Arc<str>, name: Arc<str>, animation: AnimationResource) {
        self.animations
            .entry(spec)
            .or_default()
            .insert(name, animation);
    }

    pub fn get(&self, spec: &str, name: &str) -> Option<&AnimationResource> {
        self.animations.get(spec)?.get(name)
    }

    /// Drop every animation declared on `spec`.
    pub fn remove_spec(&mut self, spec: &str) {
        self.animations.remove(spec);
    }
}
