//! Background image registry and tile-scroll state.
//!
//! Background keys are registered up front so that activating a key that
//! was never loaded fails loudly instead of drawing nothing. The active
//! background carries its placement and the tile offsets the scroll helpers
//! accumulate; a renderer tiles the image starting at those offsets.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

use crate::error::EngineError;
use crate::resources::imagestore::ImageStore;

/// Placement and scroll state of the background currently shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub key: Arc<str>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Accumulated horizontal tile offset in pixels.
    pub tile_x: f32,
    /// Accumulated vertical tile offset in pixels.
    pub tile_y: f32,
}

/// Registered background keys plus the active background, if any.
#[derive(Resource, Debug, Default)]
pub struct BackgroundStore {
    keys: FxHashSet<Arc<str>>,
    pub active: Option<Background>,
    /// Fallback colour shown when no background image is active, as a hex
    /// string such as `#000000`.
    pub colour: Option<String>,
}

impl BackgroundStore {
    /// Register a background key. Each key may be registered once.
    pub fn register(&mut self, key: impl Into<Arc<str>>) -> Result<(), EngineError> {
        let key = key.into();
        if !self.keys.insert(Arc::clone(&key)) {
            return Err(EngineError::DuplicateName {
                name: key.to_string(),
            });
        }
        Ok(())
    }

    /// Show a registered background. Width and height default to the
    /// image's natural dimensions.
    pub fn activate(
        &mut self,
        key: &str,
        images: &ImageStore,
        width: Option<f32>,
        height: Option<f32>,
        x: f32,
        y: f32,
    ) -> Result<(), EngineError> {
        let key = self
            .keys
            .get(key)
            .cloned()
            .ok_or_else(|| EngineError::UnknownKey { key: key.to_owned() })?;
        let (img_w, img_h) = images
            .dimensions(&key)
            .ok_or_else(|| EngineError::UnknownImage {
                key: key.to_string(),
            })?;
        self.active = Some(Background {
            key,
            x,
            y,
            width: width.unwrap_or(img_w as f32),
            height: height.unwrap_or(img_h as f32),
            tile_x: 0.0,
            tile_y: 0.0,
        });
        Ok(())
    }

    /// Scroll the active background horizontally. No-op when none is shown.
    pub fn scroll_x(&mut self, dx: f32) {
        if let Some(bg) = self.active.as_mut() {
            bg.tile_x += dx;
        }
    }

    /// Scroll the active background vertically. No-op when none is shown.
    pub fn scroll_y(&mut self, dy: f32) {
        if let Some(bg) = self.active.as_mut() {
            bg.tile_y += dy;
        }
    }
}
