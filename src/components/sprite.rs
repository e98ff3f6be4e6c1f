use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Sprite is identified by a texture key, its size in world units and a offset if the texture is a spritesheet.
/// The offset is used to select the correct frame from the spritesheet.
/// The origin selects the pivot point (in pixels) relative to the texture's top-left
/// used for placement/scaling when rendering.
///
/// When the texture is missing the renderer draws a rectangle filled with
/// `fallback_color`, so levels stay playable without art.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
    pub flip_v: bool,
    pub visible: bool,
    pub fallback_color: Color,
}

impl Sprite {
    /// Sprite whose pivot sits at the bottom centre of the frame.
    pub fn feet(tex_key: impl Into<String>, width: f32, height: f32, fallback_color: Color) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            origin: Vector2 {
                x: width * 0.5,
                y: height,
            },
            flip_h: false,
            flip_v: false,
            visible: true,
            fallback_color,
        }
    }

    /// Sprite whose pivot sits at the centre of the frame.
    pub fn centered(
        tex_key: impl Into<String>,
        width: f32,
        height: f32,
        fallback_color: Color,
    ) -> Self {
        Self {
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            ..Self::feet(tex_key, width, height, fallback_color)
        }
    }

    /// Sprite whose pivot is the top-left corner.
    pub fn top_left(
        tex_key: impl Into<String>,
        width: f32,
        height: f32,
        fallback_color: Color,
    ) -> Self {
        Self {
            origin: Vector2::zero(),
            ..Self::feet(tex_key, width, height, fallback_color)
        }
    }
}
