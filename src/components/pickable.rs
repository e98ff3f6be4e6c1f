//! Collectibles: coins and timed power-ups.
//!
//! Collecting hides the pickable at once. Coins are then gone for good while
//! power-ups come back after `respawn_time` somewhere inside their spawn area.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::resources::rng::GameRng;

pub const DEFAULT_PICKABLE_VALUE: f32 = 10.0;
pub const DEFAULT_RESPAWN_TIME: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickableKind {
    Coin,
    HealthPowerUp,
    InvincibilityPowerUp,
    DoubleJumpPowerUp,
}

impl PickableKind {
    pub fn is_power_up(self) -> bool {
        !matches!(self, PickableKind::Coin)
    }

    pub fn texture_key(self) -> &'static str {
        match self {
            PickableKind::Coin => "coin",
            PickableKind::HealthPowerUp => "powerup_health",
            PickableKind::InvincibilityPowerUp => "powerup_invincibility",
            PickableKind::DoubleJumpPowerUp => "powerup_double_jump",
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Pickable {
    pub kind: PickableKind,
    /// Health points, seconds of invincibility or seconds of double jump.
    pub value: f32,
    pub respawn_time: f32,
    pub spawn_area_min: Vector2,
    pub spawn_area_max: Vector2,
    pub active: bool,
}

impl Pickable {
    pub fn new(kind: PickableKind) -> Self {
        Self {
            kind,
            value: DEFAULT_PICKABLE_VALUE,
            respawn_time: DEFAULT_RESPAWN_TIME,
            spawn_area_min: Vector2::zero(),
            spawn_area_max: Vector2::zero(),
            active: true,
        }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn with_respawn_time(mut self, seconds: f32) -> Self {
        self.respawn_time = seconds.max(0.0);
        self
    }

    pub fn with_spawn_area(mut self, min: Vector2, max: Vector2) -> Self {
        self.spawn_area_min = min;
        self.spawn_area_max = max;
        self
    }

    /// Health restored by a health power-up, rounded to whole points.
    pub fn heal_amount(&self) -> i32 {
        self.value.round() as i32
    }

    pub fn random_position(&self, rng: &mut GameRng) -> Vector2 {
        rng.point_in(self.spawn_area_min, self.spawn_area_max)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        let (min_x, max_x) = (
            self.spawn_area_min.x.min(self.spawn_area_max.x),
            self.spawn_area_min.x.max(self.spawn_area_max.x),
        );
        let (min_y, max_y) = (
            self.spawn_area_min.y.min(self.spawn_area_max.y),
            self.spawn_area_min.y.max(self.spawn_area_max.y),
        );
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_coins_are_not_power_ups() {
        assert!(!PickableKind::Coin.is_power_up());
        assert!(PickableKind::HealthPowerUp.is_power_up());
        assert!(PickableKind::DoubleJumpPowerUp.is_power_up());
    }

    #[test]
    fn heal_amount_rounds() {
        let p = Pickable::new(PickableKind::HealthPowerUp).with_value(1.6);
        assert_eq!(p.heal_amount(), 2);
    }

    #[test]
    fn random_position_inside_area() {
        let mut rng = GameRng::with_seed(11);
        let p = Pickable::new(PickableKind::InvincibilityPowerUp)
            .with_spawn_area(Vector2 { x: 100.0, y: 50.0 }, Vector2 { x: 300.0, y: 120.0 });
        for _ in 0..200 {
            assert!(p.contains(p.random_position(&mut rng)));
        }
    }
}
