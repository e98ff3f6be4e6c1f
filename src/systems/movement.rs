//! Physics integration and platform collision.
//!
//! [`movement`] integrates enabled forces into velocity and velocity into
//! position. [`resolve_solids`] then pushes every [`PlatformBody`] out of the
//! [`Solid`]s it overlaps and records whether it is standing on one.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::solid::{PlatformBody, Solid};
use crate::resources::worldtime::WorldTime;

pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        let acceleration = rigidbody.total_acceleration();
        rigidbody.velocity = rigidbody.velocity + acceleration.scale_by(dt);

        if rigidbody.friction > 0.0 {
            let damping = (1.0 - rigidbody.friction * dt).max(0.0);
            rigidbody.velocity.x *= damping;
        }
        if let Some(max_fall) = rigidbody.max_fall_speed {
            rigidbody.velocity.y = rigidbody.velocity.y.min(max_fall);
        }

        let delta = rigidbody.velocity.scale_by(dt);
        position.pos = position.pos + delta;
    }
}

/// Separate platform bodies from solids along the axis of least penetration.
///
/// An upward push means the body landed on top of the solid: it becomes
/// grounded and loses its downward speed. Hitting a ceiling stops upward
/// speed, hitting a wall stops horizontal speed.
pub fn resolve_solids(
    mut bodies: Query<
        (
            &mut MapPosition,
            &BoxCollider,
            &mut PlatformBody,
            Option<&mut RigidBody>,
        ),
        Without<Solid>,
    >,
    solids: Query<(&MapPosition, &BoxCollider), With<Solid>>,
    time: Res<WorldTime>,
) {
    if time.delta <= 0.0 {
        return;
    }
    for (mut position, collider, mut body, mut maybe_rb) in bodies.iter_mut() {
        body.was_grounded = body.grounded;
        body.grounded = false;
        if !collider.enabled {
            continue;
        }
        for (solid_position, solid_collider) in solids.iter() {
            if !solid_collider.enabled {
                continue;
            }
            let Some(push) = collider.push_out(position.pos, solid_collider, solid_position.pos)
            else {
                continue;
            };
            position.pos = position.pos + push;
            let Some(rb) = maybe_rb.as_mut() else {
                if push.y < 0.0 {
                    body.grounded = true;
                }
                continue;
            };
            if push.y < 0.0 {
                body.grounded = true;
                rb.velocity.y = rb.velocity.y.min(0.0);
            } else if push.y > 0.0 {
                rb.velocity.y = rb.velocity.y.max(0.0);
            } else {
                rb.velocity.x = 0.0;
            }
        }
        if !body.grounded {
            body.grounded = standing_on_solid(position.pos, collider, &solids);
        }
    }
}

/// A body resting exactly on a surface no longer overlaps it, so probe one
/// pixel below the feet.
fn standing_on_solid(
    position: Vector2,
    collider: &BoxCollider,
    solids: &Query<(&MapPosition, &BoxCollider), With<Solid>>,
) -> bool {
    let probe = Vector2 {
        x: position.x,
        y: position.y + 1.0,
    };
    solids.iter().any(|(solid_position, solid_collider)| {
        solid_collider.enabled && collider.overlaps(probe, solid_collider, solid_position.pos)
    })
}
