//! Animation resource registry.
//!
//! Sprite-sheet animations are shared by every entity that plays them; an
//! [`Animation`](crate::components::animation::Animation) component only
//! stores its key and playback cursor.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// One row of a sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    /// Top-left corner of the first frame in the sheet.
    pub position: Vector2,
    /// Horizontal distance between frames.
    pub displacement: f32,
    pub frame_count: usize,
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationStore {
    /// Register a sheet row; `row` is multiplied by the frame height.
    #[allow(clippy::too_many_arguments)]
    pub fn add_row(
        &mut self,
        key: &str,
        tex_key: &str,
        frame_width: f32,
        frame_height: f32,
        row: usize,
        frame_count: usize,
        fps: f32,
        looped: bool,
    ) {
        self.animations.insert(
            key.to_string(),
            AnimationResource {
                tex_key: Arc::from(tex_key),
                position: Vector2 {
                    x: 0.0,
                    y: row as f32 * frame_height,
                },
                displacement: frame_width,
                frame_count: frame_count.max(1),
                fps,
                looped,
            },
        );
    }
}
