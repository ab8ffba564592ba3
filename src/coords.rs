//! Percentage-aware coordinate resolution.
//!
//! Spawn and resize inputs accept either absolute pixel values or
//! percentages of the world dimensions. A plain non-negative number is
//! already a pixel value and passes through untouched. A string (or a
//! negative number, which only makes sense as a percentage) is parsed and
//! scaled against the relevant world extent; positions are additionally
//! clamped so the object's far edge stays inside the world.
//!
//! Malformed input is the one non-fatal validation case in the crate: the
//! resolver logs a warning and substitutes 0 rather than failing the spawn.
//!
//! Width and height must be resolved before x and y, because the position
//! clamp needs the resolved object extent.

use log::warn;

use crate::error::EngineError;

/// A coordinate or size input, either absolute pixels or a percentage of a
/// world dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum Coord {
    /// Absolute pixels. Negative values are reinterpreted as (invalid)
    /// percentages.
    Px(f32),
    /// Percentage of the relevant world extent.
    Pct(f32),
    /// Unparsed text such as `"50"`, treated as a percentage.
    Raw(String),
}

impl From<f32> for Coord {
    fn from(v: f32) -> Self {
        Coord::Px(v)
    }
}

impl From<i32> for Coord {
    fn from(v: i32) -> Self {
        Coord::Px(v as f32)
    }
}

impl From<u32> for Coord {
    fn from(v: u32) -> Self {
        Coord::Px(v as f32)
    }
}

impl From<&str> for Coord {
    fn from(v: &str) -> Self {
        Coord::Raw(v.to_owned())
    }
}

impl From<String> for Coord {
    fn from(v: String) -> Self {
        Coord::Raw(v)
    }
}

/// Extract the percentage magnitude of a coordinate input.
///
/// Only called for inputs on the percentage path (strings and negative
/// numbers). Magnitudes must parse to a non-negative number.
fn magnitude(value: &Coord) -> Result<f32, EngineError> {
    let m = match value {
        Coord::Px(v) => *v,
        Coord::Pct(p) => *p,
        Coord::Raw(s) => s.trim().parse::<f32>().map_err(|_| EngineError::InvalidCoordinate {
            raw: s.clone(),
        })?,
    };
    if m >= 0.0 {
        Ok(m)
    } else {
        Err(EngineError::InvalidCoordinate {
            raw: format!("{m}"),
        })
    }
}

fn resolve(value: Coord, extent: f32, far_edge: Option<f32>) -> f32 {
    if let Coord::Px(v) = value {
        if v >= 0.0 {
            return v;
        }
    }
    match magnitude(&value) {
        Ok(pct) => {
            let mut pixels = extent * (pct / 100.0);
            if let Some(object_extent) = far_edge {
                let max = extent - object_extent;
                if pixels > max {
                    pixels = max;
                }
            }
            pixels
        }
        Err(e) => {
            warn!("coordinate input rejected, defaulting to 0: {e}");
            0.0
        }
    }
}

/// Resolve an x or y input against a world extent, clamping so the far edge
/// of an object of `object_extent` pixels does not leave the world.
pub fn resolve_position(value: impl Into<Coord>, extent: f32, object_extent: f32) -> f32 {
    resolve(value.into(), extent, Some(object_extent))
}

/// Resolve a width or height input against a world extent. No clamping.
pub fn resolve_size(value: impl Into<Coord>, extent: f32) -> f32 {
    resolve(value.into(), extent, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_pixels_pass_through() {
        assert_eq!(resolve_position(42.0, 1000.0, 200.0), 42.0);
        assert_eq!(resolve_size(0.0, 1000.0), 0.0);
    }

    #[test]
    fn percentage_string_scales_against_extent() {
        assert_eq!(resolve_position("50", 1000.0, 200.0), 500.0);
        assert_eq!(resolve_size("25", 800.0), 200.0);
    }

    #[test]
    fn position_clamps_far_edge_to_extent() {
        assert_eq!(resolve_position("100", 1000.0, 200.0), 800.0);
        assert_eq!(resolve_position("95", 1000.0, 200.0), 800.0);
    }

    #[test]
    fn size_does_not_clamp() {
        assert_eq!(resolve_size("100", 1000.0), 1000.0);
    }

    #[test]
    fn negative_number_defaults_to_zero() {
        assert_eq!(resolve_position(-5.0, 1000.0, 0.0), 0.0);
        assert_eq!(resolve_size(-50.0, 1000.0), 0.0);
    }

    #[test]
    fn fractional_negative_defaults_to_zero() {
        assert_eq!(resolve_position(-0.5, 1000.0, 0.0), 0.0);
        assert_eq!(resolve_size("-0.5", 1000.0), 0.0);
    }

    #[test]
    fn garbage_string_defaults_to_zero() {
        assert_eq!(resolve_position("banana", 1000.0, 0.0), 0.0);
        assert_eq!(resolve_size("", 1000.0), 0.0);
    }

    #[test]
    fn magnitude_reports_invalid_input() {
        let err = magnitude(&Coord::Raw("nope".into())).unwrap_err();
        assert!(matches!(err, EngineError::InvalidCoordinate { .. }));
        let err = magnitude(&Coord::Pct(-40.0)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidCoordinate { .. }));
    }
}
