//! Internal render resolution.
//!
//! Matches the [`RenderTarget`](super::rendertarget::RenderTarget) size;
//! screen-space layout (HUD, menus) is expressed in these pixels.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }
}
