//! ECS systems run by the host once per frame.
//!
//! Overview
//! - [`time`] – advances [`WorldTime`](crate::resources::worldtime::WorldTime)
//! - [`input`] – polls the input backend and derives key/mouse edges
//! - [`movement`] – integrates velocity into position
//! - [`animation`] – advances animation playback and sheet offsets
//! - [`button`] – detects pointer triggers on buttons and plays actions
//! - [`audio`] – forwards audio commands to the host channel
//!
//! A typical frame: update time, poll input, run movement and animation,
//! then buttons, then forward audio, then pump the message queues.
pub mod animation;
pub mod audio;
pub mod button;
pub mod input;
pub mod movement;
pub mod time;
