use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Display text with runtime-changeable styling.
///
/// Rendering is the host engine's job; this component only carries the
/// message and styling. Position it with
/// [`Position`](super::position::Position).
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The message to display.
    pub content: String,
    /// Font family name.
    pub font: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Hex colour such as `#FFFFFF`.
    pub colour: String,
    /// Whether the text is drawn.
    pub visible: bool,
}

impl Text {
    pub fn new(
        content: impl Into<String>,
        size_px: f32,
        font: impl Into<String>,
        colour: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            font: font.into(),
            size_px,
            colour: colour.into(),
            visible: true,
        }
    }

    pub fn change_text(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn change_colour(&mut self, colour: impl Into<String>) {
        self.colour = colour.into();
    }

    pub fn change_font(&mut self, font: impl Into<String>) {
        self.font = font.into();
    }

    pub fn change_font_size(&mut self, size_px: f32) {
        self.size_px = size_px;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_operations_update_in_place() {
        let mut text = Text::new("Score: 0", 32.0, "Arial", "#FFFFFF");
        text.change_text("Score: 10");
        text.change_colour("#FF0000");
        text.change_font_size(48.0);
        text.set_visible(false);
        assert_eq!(text.content, "Score: 10");
        assert_eq!(text.colour, "#FF0000");
        assert_eq!(text.size_px, 48.0);
        assert!(!text.visible);
    }
}
