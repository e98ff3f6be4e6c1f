//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when
//! switching scenes: observers, registered systems and the camera survive
//! every transition.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
