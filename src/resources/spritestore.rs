//! Sprite spec registry and instance arenas.
//!
//! A [`SpriteSpec`] is the declared template (image, frame geometry,
//! animation names) behind every on-screen instance. Each spec owns an
//! ordered arena of [`InstanceSlot`]s; slot indices are stable for the life
//! of the spec, so killed instances leave a dead slot behind instead of
//! shifting their siblings. Broadcast operations in [`crate::sprites`]
//! iterate live slots in creation order.

use std::sync::Arc;

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

use crate::error::EngineError;

/// One spawned instance of a spec. Dead slots keep their index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceSlot {
    pub entity: Entity,
    pub alive: bool,
}

/// The declared sprite template: image, frame geometry, and animation set.
#[derive(Debug, Clone)]
pub struct SpriteSpec {
    /// Unique spec name, generated when not supplied.
    pub name: Arc<str>,
    /// Key of the sprite sheet image in the image store.
    pub image: Arc<str>,
    /// Width of one frame in pixels. 0 disables animations.
    pub frame_width: u32,
    /// Height of one frame in pixels. 0 disables animations.
    pub frame_height: u32,
    /// Declared animation names in declaration order.
    pub animations: Vec<Arc<str>>,
    /// Instance arena in creation order. Indices are stable.
    pub instances: Vec<InstanceSlot>,
}

impl SpriteSpec {
    /// Whether `name` was declared on this spec.
    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.iter().any(|a| a.as_ref() == name)
    }

    /// Live `(index, entity)` pairs in creation order.
    pub fn live_instances(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.instances
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.alive)
            .map(|(i, slot)| (i, slot.entity))
    }

    /// Number of live instances.
    pub fn live_count(&self) -> usize {
        self.instances.iter().filter(|s| s.alive).count()
    }
}

/// Registry of every defined sprite spec, keyed by name.
#[derive(Resource, Debug, Default)]
pub struct SpriteStore {
    specs: FxHashMap<Arc<str>, SpriteSpec>,
    counter: u64,
}

impl SpriteStore {
    /// Generate a unique name with the given prefix, e.g. `Sprite3`.
    pub fn generate_name(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}{}", self.counter)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    pub fn insert(&mut self, spec: SpriteSpec) {
        self.specs.insert(Arc::clone(&spec.name), spec);
    }

    pub fn get(&self, name: &str) -> Result<&SpriteSpec, EngineError> {
        self.specs.get(name).ok_or_else(|| EngineError::UnknownSprite {
            name: name.to_owned(),
        })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut SpriteSpec, EngineError> {
        self.specs
            .get_mut(name)
            .ok_or_else(|| EngineError::UnknownSprite {
                name: name.to_owned(),
            })
    }

    /// Discard a spec, returning its slots so the caller can despawn the
    /// entities. Instance lifetime never exceeds spec lifetime.
    pub fn remove(&mut self, name: &str) -> Result<Vec<InstanceSlot>, EngineError> {
        self.specs
            .remove(name)
            .map(|spec| spec.instances)
            .ok_or_else(|| EngineError::UnknownSprite {
                name: name.to_owned(),
            })
    }
}
