//! TTL (time-to-live) system.
//!
//! Counts every [`Ttl`](crate::components::ttl::Ttl) down with the scaled
//! delta and despawns the entity once it runs out, so a paused game keeps
//! its dying enemies on screen.

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
