//! Fixed-resolution render target.
//!
//! The game draws into a texture at its internal resolution; the render
//! system then scales that texture into the window with letterboxing.
//! Non-send: GPU handles stay on the main thread.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::error::{GameError, GameResult};

pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

fn load_pixel_texture(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    width: u32,
    height: u32,
) -> GameResult<RenderTexture2D> {
    let texture = rl
        .load_render_texture(th, width, height)
        .map_err(|e| GameError::RenderTarget(e.to_string()))?;
    // sharp pixels when scaled up
    unsafe {
        ffi::SetTextureFilter(
            texture.texture,
            TextureFilter::TEXTURE_FILTER_POINT as i32,
        );
    }
    Ok(texture)
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> GameResult<Self> {
        Ok(Self {
            texture: load_pixel_texture(rl, th, width, height)?,
            game_width: width,
            game_height: height,
        })
    }

    /// Replace the texture with one of a new resolution.
    ///
    /// On failure the old texture is kept.
    pub fn recreate(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> GameResult<()> {
        self.texture = load_pixel_texture(rl, th, width, height)?;
        self.game_width = width;
        self.game_height = height;
        Ok(())
    }

    /// Source rectangle with a negative height: render textures are stored
    /// upside down.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
