use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Dynamic text component for rendering variable strings in the world or screen.
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    pub content: String,
    /// Key in [`FontStore`](crate::resources::fontstore::FontStore); the
    /// raylib default font is used when it is missing.
    pub font: String,
    pub font_size: f32,
    pub color: Color,
    /// Draw centred on the position instead of from its top-left corner.
    pub centered: bool,
    /// Measured size, cached by
    /// [`dynamictext_size_system`](crate::systems::dynamictext_size::dynamictext_size_system).
    pub size: Vector2,
}

impl DynamicText {
    pub fn new(content: impl Into<String>, font: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font: font.into(),
            font_size,
            color,
            centered: false,
            size: Vector2::zero(),
        }
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Replace the content; returns false when nothing changed.
    pub fn set_content(&mut self, new_content: impl Into<String>) -> bool {
        let new_content = new_content.into();
        if self.content == new_content {
            return false;
        }
        self.content = new_content;
        true
    }

    pub fn set_size(&mut self, size: Vector2) {
        self.size = size;
    }

    /// Top-left corner for drawing at `position`.
    pub fn draw_origin(&self, position: Vector2) -> Vector2 {
        if self.centered {
            Vector2 {
                x: position.x - self.size.x * 0.5,
                y: position.y - self.size.y * 0.5,
            }
        } else {
            position
        }
    }
}
