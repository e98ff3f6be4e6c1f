//! Gameplay events shared by collision callbacks, enemy attacks and timers.
//!
//! Damage and pickups are routed through events so every source (contact,
//! bullet, melee attack) goes through the same rules in one observer.

use bevy_ecs::prelude::*;

/// The player takes `amount` damage from an enemy.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamagePlayerEvent {
    pub player: Entity,
    pub amount: i32,
}

/// An enemy takes `amount` damage.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEnemyEvent {
    pub enemy: Entity,
    pub amount: i32,
}

/// The player touched an active pickable.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectPickableEvent {
    pub pickable: Entity,
    pub collector: Entity,
}

/// The run ended, either way. Fired once per scene.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndedEvent {
    GameOver,
    Victory,
}
