//! Timed enemy spawning.

use bevy_ecs::prelude::*;

use crate::components::enemy::Enemy;
use crate::components::enemyspawner::EnemySpawner;
use crate::components::mapposition::MapPosition;
use crate::prefabs;
use crate::resources::rng::GameRng;
use crate::resources::worldtime::WorldTime;

pub fn enemy_spawner_system(
    mut spawners: Query<(&mut EnemySpawner, &MapPosition)>,
    enemies: Query<&Enemy>,
    time: Res<WorldTime>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    if time.delta <= 0.0 {
        return;
    }
    let mut alive = enemies.iter().filter(|e| !e.dead).count();
    for (mut spawner, center) in spawners.iter_mut() {
        if !spawner.tick(time.delta) {
            continue;
        }
        if !spawner.allows_spawn(alive) {
            log::debug!("spawn skipped, {} enemies alive", alive);
            continue;
        }
        let position = spawner.spawn_point(center.pos, &mut rng);
        let speed = spawner.spawn_speed(&mut rng);
        prefabs::spawn_enemy(&mut commands, position, Some(speed));
        alive += 1;
        log::debug!(
            "enemy spawned at ({:.0}, {:.0}) speed {:.0}",
            position.x,
            position.y,
            speed
        );
    }
}
