//! Screen-space position component.
//!
//! UI elements (HUD, menu items, panel titles) use [`ScreenPosition`] so they
//! stay fixed while the camera scrolls. World entities use
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position in render-target pixels. The render system draws these after the
/// world pass.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
