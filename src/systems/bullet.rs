//! Bullet flight.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::bullet::Bullet;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::worldtime::WorldTime;

/// Distance outside the view at which a bullet is dropped.
pub const OFFSCREEN_MARGIN: f32 = 32.0;

/// Move bullets along their direction and despawn the ones that left the
/// camera view.
pub fn bullet_system(
    mut query: Query<(Entity, &Bullet, &mut MapPosition, &BoxCollider)>,
    camera: Res<Camera2DRes>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    if time.delta <= 0.0 {
        return;
    }
    let (view_min, view_max) = camera.view_rect();
    for (entity, bullet, mut position, collider) in query.iter_mut() {
        position.pos += bullet.displacement(time.delta);
        let (min, max) = collider.aabb(position.pos);
        let outside = max.x < view_min.x - OFFSCREEN_MARGIN
            || min.x > view_max.x + OFFSCREEN_MARGIN
            || max.y < view_min.y - OFFSCREEN_MARGIN
            || min.y > view_max.y + OFFSCREEN_MARGIN;
        if outside {
            commands.entity(entity).try_despawn();
        }
    }
}
