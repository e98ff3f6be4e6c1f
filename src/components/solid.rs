//! Markers for the platform physics.

use bevy_ecs::prelude::Component;

/// Static collider that [`PlatformBody`] entities cannot pass through.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Solid;

/// Entity that is pushed out of [`Solid`]s and knows when it stands on one.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlatformBody {
    pub grounded: bool,
    /// Grounded state of the previous frame, for landing detection.
    pub was_grounded: bool,
}

impl PlatformBody {
    pub fn just_landed(&self) -> bool {
        self.grounded && !self.was_grounded
    }
}
