//! Debug overlay toggle.
//!
//! While this resource exists the renderer draws colliders, pivots and the
//! diagnostic text lines.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
