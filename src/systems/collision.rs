//! Collision detection and rule dispatch.
//!
//! [`collision_detector`] tests every pair of enabled colliders (pairs made
//! only of solids are skipped, platforms are handled by
//! [`resolve_solids`](crate::systems::movement::resolve_solids)) and triggers
//! a [`CollisionEvent`] for each pair that was not touching last frame.
//! [`collision_observer`] routes those events to matching
//! [`CollisionRule`]s. The game's rule callbacks live at the bottom.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::{CollisionContext, CollisionRule};
use crate::components::group::{self, Group};
use crate::components::mapposition::MapPosition;
use crate::components::solid::Solid;
use crate::events::collision::CollisionEvent;
use crate::events::gameplay::{CollectPickableEvent, DamageEnemyEvent, DamagePlayerEvent};
use crate::resources::contacts::{ContactPairs, pair_key};

pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, Has<Solid>), With<Group>>,
    mut contacts: ResMut<ContactPairs>,
    mut commands: Commands,
) {
    let mut current = FxHashSet::default();
    for [
        (entity_a, position_a, collider_a, solid_a),
        (entity_b, position_b, collider_b, solid_b),
    ] in query.iter_combinations()
    {
        if (solid_a && solid_b) || !collider_a.enabled || !collider_b.enabled {
            continue;
        }
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            current.insert(pair_key(entity_a, entity_b));
        }
    }

    for (a, b) in contacts.advance(current) {
        commands.trigger(CollisionEvent { a, b });
    }
}

/// Run every rule whose groups match the colliding pair.
pub fn collision_observer(
    trigger: On<CollisionEvent>,
    rules: Query<&CollisionRule>,
    groups: Query<&Group>,
    mut ctx: CollisionContext,
) {
    let CollisionEvent { a, b } = *trigger.event();
    let (Ok(group_a), Ok(group_b)) = (groups.get(a), groups.get(b)) else {
        return;
    };
    for rule in rules.iter() {
        if let Some((first, second)) = rule.order(group_a.name(), group_b.name(), a, b) {
            (rule.callback)(first, second, &mut ctx);
        }
    }
}

/// The rules active in the game scene.
pub fn game_collision_rules() -> [CollisionRule; 3] {
    [
        CollisionRule::new(group::PLAYER, group::ENEMY, player_touches_enemy),
        CollisionRule::new(group::BULLET, group::ENEMY, bullet_hits_enemy),
        CollisionRule::new(group::PLAYER, group::PICKABLE, player_touches_pickable),
    ]
}

pub fn player_touches_enemy(player: Entity, enemy: Entity, ctx: &mut CollisionContext) {
    let Ok(enemy_data) = ctx.enemies.get(enemy) else {
        return;
    };
    if enemy_data.dead {
        return;
    }
    let amount = enemy_data.damage;
    ctx.commands.trigger(DamagePlayerEvent { player, amount });
}

pub fn bullet_hits_enemy(bullet: Entity, enemy: Entity, ctx: &mut CollisionContext) {
    let (Ok(bullet_data), Ok(enemy_data)) = (ctx.bullets.get(bullet), ctx.enemies.get(enemy))
    else {
        return;
    };
    if enemy_data.dead {
        return;
    }
    let amount = bullet_data.damage;
    ctx.commands.trigger(DamageEnemyEvent { enemy, amount });
    ctx.commands.entity(bullet).try_despawn();
}

pub fn player_touches_pickable(player: Entity, pickable: Entity, ctx: &mut CollisionContext) {
    let active = ctx.pickables.get(pickable).is_ok_and(|p| p.active);
    let alive = ctx.players.get(player).is_ok_and(|p| p.alive);
    if active && alive {
        ctx.commands.trigger(CollectPickableEvent {
            pickable,
            collector: player,
        });
    }
}
