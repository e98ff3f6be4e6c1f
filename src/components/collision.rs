//! Group-based collision rules.
//!
//! A [`CollisionRule`] entity pairs two group names with a callback. When the
//! collision detector reports that two entities started touching, the
//! observer finds the rules matching their groups and calls the callback with
//! the entities ordered as the rule names them.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::components::bullet::Bullet;
use crate::components::enemy::Enemy;
use crate::components::pickable::Pickable;
use crate::components::player::PlayerController;

/// Queries and commands available to collision callbacks.
#[derive(SystemParam)]
pub struct CollisionContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub players: Query<'w, 's, &'static PlayerController>,
    pub enemies: Query<'w, 's, &'static Enemy>,
    pub bullets: Query<'w, 's, &'static Bullet>,
    pub pickables: Query<'w, 's, &'static Pickable>,
}

/// Callback signature for collision rules; `a` belongs to `group_a`.
pub type CollisionCallback = fn(a: Entity, b: Entity, ctx: &mut CollisionContext);

#[derive(Component, Clone)]
pub struct CollisionRule {
    pub group_a: String,
    pub group_b: String,
    pub callback: CollisionCallback,
}

impl CollisionRule {
    pub fn new(
        group_a: impl Into<String>,
        group_b: impl Into<String>,
        callback: CollisionCallback,
    ) -> Self {
        Self {
            group_a: group_a.into(),
            group_b: group_b.into(),
            callback,
        }
    }

    pub fn matches(&self, group_a: &str, group_b: &str) -> bool {
        (self.group_a == group_a && self.group_b == group_b)
            || (self.group_a == group_b && self.group_b == group_a)
    }

    /// Order `(first, second)` so the result matches `(group_a, group_b)`.
    pub fn order(
        &self,
        first_group: &str,
        second_group: &str,
        first: Entity,
        second: Entity,
    ) -> Option<(Entity, Entity)> {
        if self.group_a == first_group && self.group_b == second_group {
            Some((first, second))
        } else if self.group_a == second_group && self.group_b == first_group {
            Some((second, first))
        } else {
            None
        }
    }
}
