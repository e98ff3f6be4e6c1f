//! Collision notifications.
//!
//! The collision detector triggers [`CollisionEvent`] once when two enabled
//! colliders start overlapping. Staying in contact does not repeat the event;
//! separating and touching again does.

use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider start to overlap.
///
/// No ordering guarantees are provided between `a` and `b`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
