//! Present while the window is in full screen mode.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FullScreen {}
