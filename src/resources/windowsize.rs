//! Window size and letterboxing.
//!
//! The OS window can have any size; the game renders at a fixed resolution
//! and is scaled into the largest centred rectangle with the same aspect.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

/// Window size in pixels, refreshed every frame by the main loop.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Destination rectangle of the render target inside the window.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        if window_w / window_h > game_w / game_h {
            // bars left and right
            let scaled_w = game_w * window_h / game_h;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            let scaled_h = game_h * window_w / game_w;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }

    /// Map a window position (mouse) into render-target pixels, clamped to
    /// the game area.
    pub fn window_to_game_pos(&self, window_pos: Vector2, game_width: u32, game_height: u32) -> Vector2 {
        let letterbox = self.calculate_letterbox(game_width, game_height);
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        Vector2 {
            x: ((window_pos.x - letterbox.x) * game_w / letterbox.width).clamp(0.0, game_w),
            y: ((window_pos.y - letterbox.y) * game_h / letterbox.height).clamp(0.0, game_h),
        }
    }
}
