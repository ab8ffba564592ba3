//! ECS components attached to sprite instances and other on-screen objects.
//!
//! Overview
//! - `position` – world-space position in pixels
//! - `velocity` – velocity in pixels per second
//! - `rotation` – display angle in degrees
//! - `opacity` – alpha transparency
//! - `sprite` – sprite-sheet frame selection and display size
//! - `playback` – animation playback state and stop frame
//! - `button` – trigger-to-animation action map for clickable sprites
//! - `text` – display text with runtime-changeable styling
pub mod button;
pub mod opacity;
pub mod playback;
pub mod position;
pub mod rotation;
pub mod sprite;
pub mod text;
pub mod velocity;
