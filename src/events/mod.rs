//! Message types exchanged through the ECS message queues.
//!
//! Submodules:
//! - [`animation`] – notification that a non-looping animation finished
//! - [`audio`] – commands forwarded to the host audio consumer
//! - [`button`] – pointer trigger events detected on buttons
//!
//! See each submodule for concrete message data and semantics.
pub mod animation;
pub mod audio;
pub mod button;
