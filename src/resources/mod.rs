//! ECS resources made available to systems and the sprite API.
//!
//! This module groups the long-lived data injected into the ECS world:
//! asset stores, registries, timing, input state, and the audio bridge.
//!
//! Overview
//! - `animationstore` – animation definitions keyed by (sprite, name)
//! - `audio` – command channel bridging the world to the host audio device
//! - `backgroundstore` – registered background keys and the active background
//! - `gameconfig` – title and world dimensions loaded from an INI file
//! - `imagestore` – cached image metadata keyed by string IDs
//! - `input` – tracked keyboard and mouse state with edge detection
//! - `renderorder` – stable draw-order arena of sprite spec keys
//! - `spritestore` – sprite specs and their instance arenas
//! - `worldbounds` – world dimensions in pixels
//! - `worldtime` – simulation time, delta, and pause state
pub mod animationstore;
pub mod audio;
pub mod backgroundstore;
pub mod gameconfig;
pub mod imagestore;
pub mod input;
pub mod renderorder;
pub mod spritestore;
pub mod worldbounds;
pub mod worldtime;
