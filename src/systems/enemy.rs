//! Enemy systems.
//!
//! [`enemy_ai_system`] picks a state from the distance to the player and
//! performs attacks; [`enemy_motion`] smooths the body velocity towards the
//! AI target. [`damage_enemy_observer`] handles hits and death.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::{DEATH_DESPAWN_DELAY, Enemy, EnemyAi, EnemyState};
use crate::components::mapposition::MapPosition;
use crate::components::player::{DamageOutcome, PlayerController};
use crate::components::rigidbody::RigidBody;
use crate::components::signals::{self, Signals};
use crate::components::sprite::Sprite;
use crate::components::ttl::Ttl;
use crate::events::audio::AudioCmd;
use crate::events::gameplay::{DamageEnemyEvent, DamagePlayerEvent, RunEndedEvent};
use crate::resources::audio::AudioManager;
use crate::resources::session::{GameSession, Outcome};
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

pub const SFX_ENEMY_ATTACK: &str = "enemy_attack";
pub const SFX_ENEMY_HIT: &str = "enemy_hit";
pub const SFX_ENEMY_DIE: &str = "enemy_die";

pub fn enemy_ai_system(
    mut enemies: Query<
        (
            &mut Enemy,
            &mut EnemyAi,
            &MapPosition,
            &mut Signals,
            &mut Sprite,
        ),
        Without<PlayerController>,
    >,
    players: Query<(Entity, &PlayerController, &MapPosition, &BoxCollider)>,
    time: Res<WorldTime>,
    audio: Res<AudioManager>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    if time.delta <= 0.0 {
        return;
    }
    let target = players
        .iter()
        .find(|(_, controller, _, _)| controller.alive)
        .map(|(entity, _, position, collider)| (entity, position.pos, collider));

    for (mut enemy, mut ai, position, mut signals, mut sprite) in enemies.iter_mut() {
        let to_player = target.map(|(_, player_pos, _)| player_pos - position.pos);
        let decision = ai.think(to_player, time.elapsed, enemy.dead);
        signals.set_scalar(signals::SPEED, decision.movement_speed);
        signals.set_flag_to(signals::MOVING, decision.movement_speed > 0.0);

        if enemy.dead {
            continue;
        }
        if let Some((_, player_pos, _)) = target {
            enemy.face_towards(position.pos.x, player_pos.x);
            if sprite.flip_h == enemy.facing_right {
                sprite.flip_h = !enemy.facing_right;
            }
        }

        if decision.attack {
            signals.set_flag(signals::ATTACKING);
            audio_cmds.write_batch(audio.play_sfx(SFX_ENEMY_ATTACK));
            if let Some((player, player_pos, collider)) = target {
                let (min, max) = enemy.hit_box(position.pos);
                if collider.enabled && collider.overlaps_rect(player_pos, min, max) {
                    commands.trigger(DamagePlayerEvent {
                        player,
                        amount: enemy.attack_damage,
                    });
                }
            }
        } else if ai.state != EnemyState::Attacking || signals.has_flag(signals::ANIMATION_ENDED)
        {
            signals.clear_flag(signals::ATTACKING);
        }
    }
}

pub fn enemy_motion(mut query: Query<(&mut EnemyAi, &mut RigidBody)>, time: Res<WorldTime>) {
    if time.delta <= 0.0 {
        return;
    }
    for (mut ai, mut body) in query.iter_mut() {
        body.velocity = ai.step_velocity(time.delta);
    }
}

pub fn damage_enemy_observer(
    trigger: On<DamageEnemyEvent>,
    mut enemies: Query<(
        &mut Enemy,
        &mut EnemyAi,
        &mut RigidBody,
        &mut BoxCollider,
        &mut Signals,
    )>,
    mut session: ResMut<GameSession>,
    mut world_signals: ResMut<WorldSignals>,
    audio: Res<AudioManager>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((mut enemy, mut ai, mut body, mut collider, mut signals)) =
        enemies.get_mut(event.enemy)
    else {
        return;
    };
    match enemy.take_damage(event.amount) {
        DamageOutcome::Ignored => {}
        DamageOutcome::Hurt => {
            audio_cmds.write_batch(audio.play_sfx(SFX_ENEMY_HIT));
        }
        DamageOutcome::Died => {
            ai.stop_movement();
            body.velocity = raylib::prelude::Vector2::zero();
            collider.enabled = false;
            signals.set_flag(signals::DEAD);
            signals.clear_flag(signals::ATTACKING);
            signals.set_scalar(signals::SPEED, 0.0);
            signals.clear_flag(signals::MOVING);
            commands.entity(event.enemy).insert(Ttl::new(DEATH_DESPAWN_DELAY));
            audio_cmds.write_batch(audio.play_sfx(SFX_ENEMY_DIE));

            if session.enemy_killed() == Some(Outcome::Victory) {
                commands.trigger(RunEndedEvent::Victory);
            }
            session.publish(&mut world_signals);
        }
    }
}
