use bevy_ecs::prelude::Component;

/// Makes the camera track this entity horizontally at a fixed height.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraFollow {
    /// World y the camera centres on.
    pub offset_y: f32,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self { offset_y: 180.0 }
    }
}
