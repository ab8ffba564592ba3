//! Error taxonomy shared by the sprite, animation, background, and
//! high-score registries.
//!
//! Validation failures are fatal to the single call that raised them and are
//! surfaced to the caller as [`EngineError`]. The one deliberate exception is
//! coordinate parsing: [`crate::coords`] logs a diagnostic and substitutes 0
//! instead of failing the spawn that supplied the bad value.
//!
//! Broadcast operations over a sprite's instances never abort mid-loop; the
//! per-instance failures are collected and reported once as
//! [`EngineError::Broadcast`] so that one bad instance cannot block its
//! siblings.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A name-keyed registry already holds an entry under this name.
    #[error("the name \"{name}\" has already been set")]
    DuplicateName { name: String },

    /// The sprite was defined with a frame width or height of 0, which
    /// disables animations for that sprite.
    #[error("sprite \"{sprite}\" has no frame dimensions, animations are disabled")]
    InvalidDimensions { sprite: String },

    /// A declared animation frame lies outside the sprite sheet.
    #[error("frame {frame} is outside the valid range, the highest frame is {max}")]
    FrameOutOfRange { frame: usize, max: usize },

    /// The animation was never declared on the owning sprite.
    #[error("an animation with the name \"{name}\" has not been set")]
    UnknownAnimation { name: String },

    /// No sprite has been defined under this name.
    #[error("no sprite defined with the name \"{name}\"")]
    UnknownSprite { name: String },

    /// The image key has not been loaded into the image store.
    #[error("no image loaded under the key \"{key}\"")]
    UnknownImage { key: String },

    /// A background key that was never registered.
    #[error("the key \"{key}\" has not been set for your background images")]
    UnknownKey { key: String },

    /// The instance was killed; its entity no longer exists.
    #[error("the instance has been killed")]
    InstanceDead,

    /// A coordinate string or negative value did not parse to a usable
    /// percentage. Handled internally by the resolver (warn + 0).
    #[error("the value \"{raw}\" is not a valid number")]
    InvalidCoordinate { raw: String },

    /// Index outside the high-score board.
    #[error("the index {index} is outside the valid range of the highscores (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A required constructor argument was empty.
    #[error("missing required field \"{field}\"")]
    MissingRequiredField { field: &'static str },

    /// A score ordering string that is neither ascending nor descending.
    #[error("\"{value}\" is not a valid score order (expected ASC or DESC)")]
    InvalidOrder { value: String },

    /// One or more instances failed during a broadcast operation. The
    /// operation was still applied to every other live instance; the vec
    /// holds `(arena index, failure)` pairs in visit order.
    #[error("broadcast failed on {} instance(s)", .failures.len())]
    Broadcast { failures: Vec<(usize, EngineError)> },
}
