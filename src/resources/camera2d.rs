//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The camera follow system moves the
//! target; the offset keeps it centred in the render target.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera looking at `target`, centred in a `width × height` render target.
    pub fn centered(width: f32, height: f32, target: Vector2) -> Self {
        Self(Camera2D {
            target,
            offset: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            rotation: 0.0,
            zoom: 1.0,
        })
    }

    /// Size of the visible world area.
    pub fn view_size(&self) -> Vector2 {
        let zoom = if self.0.zoom > 0.0 { self.0.zoom } else { 1.0 };
        Vector2 {
            x: self.0.offset.x * 2.0 / zoom,
            y: self.0.offset.y * 2.0 / zoom,
        }
    }

    /// World-space (min, max) corners of the visible area.
    pub fn view_rect(&self) -> (Vector2, Vector2) {
        let half = self.view_size().scale_by(0.5);
        (self.0.target - half, self.0.target + half)
    }
}

/// Map a render-target position to world space. Rotation is not supported.
pub fn screen_to_world(camera: &Camera2D, screen: Vector2) -> Vector2 {
    let zoom = if camera.zoom > 0.0 { camera.zoom } else { 1.0 };
    Vector2 {
        x: (screen.x - camera.offset.x) / zoom + camera.target.x,
        y: (screen.y - camera.offset.y) / zoom + camera.target.y,
    }
}
