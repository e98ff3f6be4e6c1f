//! Pickable collection.
//!
//! The pickable is switched off before its effect is applied, so a second
//! contact in the same frame finds it inactive. Coins are despawned; power-ups
//! wait for their `pickup_respawn` timer.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::pickable::{Pickable, PickableKind};
use crate::components::player::{PlayerController, PlayerHealth};
use crate::components::sprite::Sprite;
use crate::components::timer::{self, Timers};
use crate::events::audio::AudioCmd;
use crate::events::gameplay::{CollectPickableEvent, RunEndedEvent};
use crate::resources::audio::AudioManager;
use crate::resources::session::{GameSession, Outcome};
use crate::resources::worldsignals::WorldSignals;

pub const SFX_COLLECT: &str = "collect";

pub fn collect_pickable_observer(
    trigger: On<CollectPickableEvent>,
    mut pickables: Query<
        (&mut Pickable, &mut Sprite, &mut BoxCollider, Option<&mut Timers>),
        Without<PlayerController>,
    >,
    mut players: Query<(&mut PlayerController, &mut PlayerHealth, &mut Timers)>,
    mut session: ResMut<GameSession>,
    mut world_signals: ResMut<WorldSignals>,
    audio: Res<AudioManager>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Ok((mut pickable, mut sprite, mut collider, pickable_timers)) =
        pickables.get_mut(event.pickable)
    else {
        return;
    };
    if !pickable.active {
        return;
    }
    pickable.active = false;
    sprite.visible = false;
    collider.enabled = false;
    audio_cmds.write_batch(audio.play_sfx(SFX_COLLECT));

    let kind = pickable.kind;
    match kind {
        PickableKind::Coin => {
            if session.add_coin() == Some(Outcome::Victory) {
                commands.trigger(RunEndedEvent::Victory);
            }
            session.publish(&mut world_signals);
        }
        PickableKind::HealthPowerUp => {
            if let Ok((_, mut health, _)) = players.get_mut(event.collector) {
                let current = health.restore_health(pickable.heal_amount());
                log::debug!("healed to {}", current);
            }
        }
        PickableKind::InvincibilityPowerUp => {
            if let Ok((_, mut health, mut timers)) = players.get_mut(event.collector) {
                if health.activate_invincibility(pickable.value) {
                    timers.start(timer::INVINCIBILITY_END, pickable.value);
                }
            }
        }
        PickableKind::DoubleJumpPowerUp => {
            if let Ok((mut controller, _, mut timers)) = players.get_mut(event.collector) {
                controller.activate_double_jump();
                timers.start(timer::DOUBLE_JUMP_END, pickable.value);
            }
        }
    }

    if kind.is_power_up() {
        match pickable_timers {
            Some(mut timers) => timers.start(timer::PICKUP_RESPAWN, pickable.respawn_time),
            None => log::warn!("{:?} has no timers, it will not respawn", kind),
        }
    } else {
        commands.entity(event.pickable).try_despawn();
    }
}
