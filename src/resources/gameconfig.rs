//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [game]
//! title = My Headstart Game
//!
//! [world]
//! width = 800
//! height = 600
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TITLE: &str = "My Headstart Game";
const DEFAULT_WORLD_WIDTH: u32 = 800;
const DEFAULT_WORLD_HEIGHT: u32 = 600;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the window title and the world dimensions that percentage
/// coordinates are resolved against. [`init_world`](crate::game::init_world)
/// copies the dimensions into the
/// [`WorldBounds`](crate::resources::worldbounds::WorldBounds) resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Title shown by the host window.
    pub title: String,
    /// World width in pixels.
    pub world_width: u32,
    /// World height in pixels.
    pub world_height: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(title) = config.get("game", "title") {
            self.title = title;
        }
        if let Some(width) = config.getuint("world", "width").ok().flatten() {
            self.world_width = width as u32;
        }
        if let Some(height) = config.getuint("world", "height").ok().flatten() {
            self.world_height = height as u32;
        }

        info!(
            "Loaded config: \"{}\", {}x{} world",
            self.title, self.world_width, self.world_height
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("game", "title", Some(self.title.clone()));
        config.set("world", "width", Some(self.world_width.to_string()));
        config.set("world", "height", Some(self.world_height.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the world size.
    pub fn world_size(&self) -> (u32, u32) {
        (self.world_width, self.world_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.world_size(), (800, 600));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive a failed load
        assert_eq!(config.world_size(), (800, 600));
    }
}
