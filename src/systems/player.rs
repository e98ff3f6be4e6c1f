//! Player systems.
//!
//! - [`player_input`] – walk, jump and shoot from the current [`InputState`]
//! - [`player_signals`] – mirrors the controller into animation signals
//! - [`player_blink`] – flashes the sprite while invincible
//! - [`damage_player_observer`] – applies a [`DamagePlayerEvent`]

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::{DamageOutcome, PlayerController, PlayerHealth, aim_direction};
use crate::components::rigidbody::RigidBody;
use crate::components::signals::{self, Signals};
use crate::components::solid::PlatformBody;
use crate::components::sprite::Sprite;
use crate::components::timer::{self, Timers};
use crate::events::audio::AudioCmd;
use crate::events::gameplay::DamagePlayerEvent;
use crate::prefabs;
use crate::resources::audio::AudioManager;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub const SFX_JUMP: &str = "jump";
pub const SFX_SHOOT: &str = "shoot";
pub const SFX_PLAYER_HURT: &str = "player_hurt";
pub const SFX_PLAYER_DIE: &str = "player_die";

/// Blink period of an invincible player, in seconds.
const BLINK_PERIOD: f32 = 0.1;

pub fn player_input(
    mut query: Query<(
        &mut PlayerController,
        &mut RigidBody,
        &mut PlatformBody,
        &MapPosition,
        &mut Sprite,
    )>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    audio: Res<AudioManager>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    if time.delta <= 0.0 {
        return;
    }
    for (mut controller, mut body, mut platform, position, mut sprite) in query.iter_mut() {
        if !controller.alive {
            continue;
        }
        if platform.just_landed() {
            controller.land();
        }

        let axis = input.horizontal_axis();
        body.velocity.x = controller.horizontal_velocity(axis);
        controller.update_facing(axis);
        if sprite.flip_h == controller.facing_right {
            sprite.flip_h = !controller.facing_right;
        }

        if input.jump.just_pressed {
            if let Some(vy) = controller.try_jump(platform.grounded) {
                body.velocity.y = vy;
                platform.grounded = false;
                audio_cmds.write_batch(audio.play_sfx(SFX_JUMP));
            }
        }

        if input.fire.just_pressed {
            let origin = controller.bullet_spawn_point(position.pos);
            let direction = aim_direction(origin, input.mouse_world);
            prefabs::spawn_bullet(&mut commands, origin, direction);
            audio_cmds.write_batch(audio.play_sfx(SFX_SHOOT));
        }
    }
}

/// Publish `grounded`, `moving`, `dead`, `invincible` and `speed`.
pub fn player_signals(
    mut query: Query<(
        &PlayerController,
        &PlayerHealth,
        &PlatformBody,
        &RigidBody,
        &mut Signals,
    )>,
) {
    for (controller, health, platform, body, mut signals) in query.iter_mut() {
        let speed = body.velocity.x.abs();
        signals.set_flag_to(signals::GROUNDED, platform.grounded);
        signals.set_flag_to(signals::MOVING, speed > 1.0);
        signals.set_flag_to(signals::DEAD, !controller.alive);
        signals.set_flag_to(signals::INVINCIBLE, health.invincible);
        signals.set_scalar(signals::SPEED, speed);
    }
}

pub fn player_blink(mut query: Query<(&PlayerHealth, &mut Sprite)>, time: Res<WorldTime>) {
    for (health, mut sprite) in query.iter_mut() {
        let visible = if health.invincible && !health.dead {
            (time.elapsed / BLINK_PERIOD) as i64 % 2 == 0
        } else {
            true
        };
        if sprite.visible != visible {
            sprite.visible = visible;
        }
    }
}

pub fn damage_player_observer(
    trigger: On<DamagePlayerEvent>,
    mut players: Query<(
        &mut PlayerController,
        &mut PlayerHealth,
        &mut RigidBody,
        &mut Timers,
    )>,
    audio: Res<AudioManager>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    let Ok((mut controller, mut health, mut body, mut timers)) = players.get_mut(event.player)
    else {
        return;
    };
    match health.take_damage(event.amount) {
        DamageOutcome::Ignored => {}
        DamageOutcome::Hurt => {
            log::debug!("player hit for {}, health {}", event.amount, health.current);
            audio_cmds.write_batch(audio.play_sfx(SFX_PLAYER_HURT));
        }
        DamageOutcome::Died => {
            log::info!("player died");
            controller.alive = false;
            body.freeze();
            timers.cancel(timer::INVINCIBILITY_END);
            timers.cancel(timer::DOUBLE_JUMP_END);
            timers.start(timer::PLAYER_DEATH, controller.death_delay);
            audio_cmds.write_batch(audio.play_sfx(SFX_PLAYER_DIE));
        }
    }
}
