//! Image metadata cache.
//!
//! The host render backend owns the actual pixel data; when it caches an
//! image it records the path and dimensions here so that sprite bookkeeping
//! (total-frame validation, natural-size spawning, background sizing) can
//! run without touching the renderer.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Path and pixel dimensions of one cached image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Cached image metadata keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct ImageStore {
    pub map: FxHashMap<Arc<str>, ImageInfo>,
}

impl ImageStore {
    /// Record a cached image. Re-inserting a key replaces its metadata.
    pub fn insert(&mut self, key: impl Into<Arc<str>>, info: ImageInfo) {
        self.map.insert(key.into(), info);
    }

    pub fn get(&self, key: &str) -> Option<&ImageInfo> {
        self.map.get(key)
    }

    /// Pixel dimensions of a cached image, if present.
    pub fn dimensions(&self, key: &str) -> Option<(u32, u32)> {
        self.map.get(key).map(|i| (i.width, i.height))
    }
}
