//! Time update systems.
//!
//! [`update_world_time`] advances the shared
//! [`WorldTime`](crate::resources::worldtime::WorldTime) once per frame,
//! applying `time_scale` to the provided delta. [`update_timers`] ticks every
//! [`Timers`] component with the scaled delta and triggers a [`TimerEvent`]
//! per finished countdown; [`timer_observer`] applies what each signal means.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::pickable::Pickable;
use crate::components::player::{PlayerController, PlayerHealth};
use crate::components::sprite::Sprite;
use crate::components::timer::{self, Timers};
use crate::events::gameplay::RunEndedEvent;
use crate::events::timer::TimerEvent;
use crate::resources::rng::GameRng;
use crate::resources::session::GameSession;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
}

/// Tick all timers and trigger a [`TimerEvent`] for each one that finished.
///
/// Nothing ticks while the game is paused (`delta` is zero).
pub fn update_timers(
    mut query: Query<(Entity, &mut Timers)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    if time.delta <= 0.0 {
        return;
    }
    for (entity, mut timers) in query.iter_mut() {
        if timers.is_empty() {
            continue;
        }
        for signal in timers.tick(time.delta) {
            commands.trigger(TimerEvent { entity, signal });
        }
    }
}

/// Apply the effect behind a finished timer.
pub fn timer_observer(
    trigger: On<TimerEvent>,
    mut players: Query<(&mut PlayerController, &mut PlayerHealth)>,
    mut pickables: Query<(
        &mut Pickable,
        &mut MapPosition,
        &mut Sprite,
        &mut BoxCollider,
    )>,
    mut session: ResMut<GameSession>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
) {
    let event = trigger.event();
    match event.signal.as_str() {
        timer::INVINCIBILITY_END => {
            if let Ok((_, mut health)) = players.get_mut(event.entity) {
                health.end_invincibility();
                log::debug!("invincibility ended");
            }
        }
        timer::DOUBLE_JUMP_END => {
            if let Ok((mut controller, _)) = players.get_mut(event.entity) {
                controller.end_double_jump();
                log::debug!("double jump ended");
            }
        }
        timer::PICKUP_RESPAWN => {
            if let Ok((mut pickable, mut position, mut sprite, mut collider)) =
                pickables.get_mut(event.entity)
            {
                position.pos = pickable.random_position(&mut rng);
                pickable.active = true;
                sprite.visible = true;
                collider.enabled = true;
                log::debug!(
                    "{:?} respawned at ({:.0}, {:.0})",
                    pickable.kind,
                    position.pos.x,
                    position.pos.y
                );
            }
        }
        timer::PLAYER_DEATH => {
            if session.set_game_over().is_some() {
                commands.trigger(RunEndedEvent::GameOver);
            }
        }
        other => log::warn!("unhandled timer signal '{}'", other),
    }
}
