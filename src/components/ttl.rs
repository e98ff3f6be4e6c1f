//! Time-to-live component for automatic entity despawning.
//!
//! Used for dying enemies (despawn once the death animation played) and as a
//! backstop for bullets that never leave the view.

use bevy_ecs::prelude::Component;

/// Despawns the entity once `remaining` reaches zero.
///
/// The countdown respects [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).
#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
