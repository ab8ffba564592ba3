//! Headstart game library.
//!
//! A backend-agnostic 2D game layer: sprite specs with instance arenas,
//! frame animation, percentage-aware placement, clickable buttons, tiled
//! backgrounds, tracked input with edge detection, a channel-bridged audio
//! command surface, and persistent high-score boards. The host owns the
//! window, renderer, input device, and audio device; this crate owns the
//! bookkeeping between them, built on `bevy_ecs`.

pub mod backend;
pub mod buttons;
pub mod components;
pub mod coords;
pub mod error;
pub mod events;
pub mod game;
pub mod highscore;
pub mod resources;
pub mod sprites;
pub mod systems;
