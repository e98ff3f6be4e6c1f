use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::resources::rng::GameRng;

/// Periodically spawns enemies inside a rectangle centred on the entity.
#[derive(Component, Debug, Clone)]
pub struct EnemySpawner {
    pub interval: f32,
    pub area_size: Vector2,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Skip spawns while this many enemies are alive; 0 disables the cap.
    pub max_alive: usize,
    pub timer: f32,
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self {
            interval: 2.0,
            area_size: Vector2 { x: 320.0, y: 160.0 },
            min_speed: 32.0,
            max_speed: 96.0,
            max_alive: 0,
            timer: 0.0,
        }
    }
}

impl EnemySpawner {
    /// Accumulate `dt`; returns true (and resets) when a spawn is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.timer >= self.interval {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }

    pub fn allows_spawn(&self, alive: usize) -> bool {
        self.max_alive == 0 || alive < self.max_alive
    }

    pub fn spawn_point(&self, center: Vector2, rng: &mut GameRng) -> Vector2 {
        Vector2 {
            x: center.x + rng.range_f32(-self.area_size.x, self.area_size.x) * 0.5,
            y: center.y + rng.range_f32(-self.area_size.y, self.area_size.y) * 0.5,
        }
    }

    pub fn spawn_speed(&self, rng: &mut GameRng) -> f32 {
        rng.range_f32(self.min_speed, self.max_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_exactly_at_interval() {
        let mut spawner = EnemySpawner::default();
        assert!(!spawner.tick(1.0));
        assert!(!spawner.tick(0.5));
        assert!(spawner.tick(0.5));
        assert_eq!(spawner.timer, 0.0);
    }

    #[test]
    fn spawn_point_and_speed_in_range() {
        let spawner = EnemySpawner::default();
        let mut rng = GameRng::with_seed(5);
        let center = Vector2 { x: 400.0, y: 100.0 };
        for _ in 0..200 {
            let p = spawner.spawn_point(center, &mut rng);
            assert!((p.x - center.x).abs() <= spawner.area_size.x * 0.5);
            assert!((p.y - center.y).abs() <= spawner.area_size.y * 0.5);
            let s = spawner.spawn_speed(&mut rng);
            assert!(s >= spawner.min_speed && s <= spawner.max_speed);
        }
    }

    #[test]
    fn cap_limits_spawns() {
        let spawner = EnemySpawner {
            max_alive: 2,
            ..Default::default()
        };
        assert!(spawner.allows_spawn(1));
        assert!(!spawner.allows_spawn(2));
        assert!(EnemySpawner::default().allows_spawn(1000));
    }
}
