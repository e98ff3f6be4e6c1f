//! Animation systems.
//!
//! - [`animation`] advances animations based on elapsed time and updates the
//!   visible sprite frame. Non-looping animations hold their last frame and
//!   raise the `animation_ended` signal.
//! - [`animation_controller`] selects which animation should be active based
//!   on rule conditions evaluated against entity [`Signals`].
//!
//! The player and enemy rule sets are built by [`player_animation_controller`]
//! and [`enemy_animation_controller`].

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::{Animation, AnimationController, CmpOp, Condition};
use crate::components::signals::{self, Signals};
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub const PLAYER_IDLE: &str = "player_idle";
pub const PLAYER_RUN: &str = "player_run";
pub const PLAYER_JUMP: &str = "player_jump";
pub const PLAYER_DIE: &str = "player_die";
pub const ENEMY_IDLE: &str = "enemy_idle";
pub const ENEMY_WALK: &str = "enemy_walk";
pub const ENEMY_ATTACK: &str = "enemy_attack";
pub const ENEMY_DIE: &str = "enemy_die";
pub const PICKABLE_SPIN: &str = "pickable_spin";

/// Speed above which an enemy counts as walking.
const WALK_THRESHOLD: f32 = 1.0;

/// Advance animation playback and update the sprite frame.
///
/// Uses the scaled delta, so animations freeze while the game is paused.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite, Option<&mut Signals>)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite, mut maybe_signals) in query.iter_mut() {
        let Some(animation) = animation_store.animations.get(&anim_comp.animation_key) else {
            continue;
        };
        if animation.fps <= 0.0 {
            continue;
        }
        anim_comp.elapsed_time += time.delta;

        let frame_duration = 1.0 / animation.fps;
        while anim_comp.elapsed_time >= frame_duration {
            anim_comp.elapsed_time -= frame_duration;
            anim_comp.frame_index += 1;
            if anim_comp.frame_index >= animation.frame_count {
                if animation.looped {
                    anim_comp.frame_index = 0;
                } else {
                    // stay on last frame
                    anim_comp.frame_index = animation.frame_count - 1;
                    anim_comp.elapsed_time = 0.0;
                    if let Some(signals) = maybe_signals.as_mut() {
                        signals.set_flag(signals::ANIMATION_ENDED);
                    }
                    break;
                }
            }
        }

        let frame_x = animation.position.x + (anim_comp.frame_index as f32 * animation.displacement);
        sprite.offset = Vector2 {
            x: frame_x,
            y: animation.position.y,
        };
        if sprite.tex_key.as_str() != &*animation.tex_key {
            sprite.tex_key = animation.tex_key.to_string();
        }
    }
}

/// Evaluate a controller condition against an entity's current signals.
pub fn evaluate_condition(signals: &Signals, condition: &Condition) -> bool {
    match condition {
        Condition::ScalarCmp { key, op, value } => signals
            .get_scalar(key)
            .is_some_and(|current| op.apply(current, *value)),
        Condition::HasFlag { key } => signals.has_flag(key),
        Condition::LacksFlag { key } => !signals.has_flag(key),
        Condition::All(conditions) => conditions.iter().all(|c| evaluate_condition(signals, c)),
        Condition::Any(conditions) => conditions.iter().any(|c| evaluate_condition(signals, c)),
        Condition::Not(cond) => !evaluate_condition(signals, cond),
    }
}

/// Pick the key the controller wants for `signals`.
pub fn select_animation<'a>(controller: &'a AnimationController, signals: &Signals) -> &'a str {
    controller
        .rules
        .iter()
        .find(|rule| evaluate_condition(signals, &rule.when))
        .map(|rule| rule.set_key.as_str())
        .unwrap_or(controller.fallback_key.as_str())
}

/// Select the active animation track according to controller rules.
///
/// The first matching rule wins, otherwise the fallback. Switching resets
/// playback and clears `animation_ended`.
pub fn animation_controller(
    mut query: Query<(&mut AnimationController, &mut Animation, &mut Signals)>,
) {
    for (mut controller, mut animation, mut signals) in query.iter_mut() {
        let target_key = select_animation(&controller, &signals).to_string();
        if animation.animation_key != target_key {
            animation.restart(target_key.clone());
            signals.clear_flag(signals::ANIMATION_ENDED);
            controller.current_key = target_key;
        }
    }
}

pub fn player_animation_controller() -> AnimationController {
    AnimationController::new(PLAYER_IDLE)
        .with_rule(Condition::flag(signals::DEAD), PLAYER_DIE)
        .with_rule(Condition::no_flag(signals::GROUNDED), PLAYER_JUMP)
        .with_rule(Condition::flag(signals::MOVING), PLAYER_RUN)
}

pub fn enemy_animation_controller() -> AnimationController {
    AnimationController::new(ENEMY_IDLE)
        .with_rule(Condition::flag(signals::DEAD), ENEMY_DIE)
        .with_rule(Condition::flag(signals::ATTACKING), ENEMY_ATTACK)
        .with_rule(
            Condition::scalar(signals::SPEED, CmpOp::Gt, WALK_THRESHOLD),
            ENEMY_WALK,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_flags(flags: &[&str]) -> Signals {
        let mut s = Signals::default();
        for flag in flags {
            s.set_flag(flag);
        }
        s
    }

    // ===== CONDITIONS =====

    #[test]
    fn scalar_comparisons() {
        let mut s = Signals::default();
        s.set_scalar("speed", 10.0);
        assert!(evaluate_condition(&s, &Condition::scalar("speed", CmpOp::Ge, 10.0)));
        assert!(evaluate_condition(&s, &Condition::scalar("speed", CmpOp::Le, 10.0)));
        assert!(!evaluate_condition(&s, &Condition::scalar("speed", CmpOp::Gt, 10.0)));
        assert!(!evaluate_condition(&s, &Condition::scalar("speed", CmpOp::Lt, 10.0)));
    }

    #[test]
    fn missing_scalar_never_matches() {
        let s = Signals::default();
        assert!(!evaluate_condition(&s, &Condition::scalar("speed", CmpOp::Lt, 1.0)));
    }

    #[test]
    fn combinators() {
        let s = with_flags(&["a"]);
        let both = Condition::All(vec![Condition::flag("a"), Condition::flag("b")]);
        let either = Condition::Any(vec![Condition::flag("a"), Condition::flag("b")]);
        assert!(!evaluate_condition(&s, &both));
        assert!(evaluate_condition(&s, &either));
        assert!(evaluate_condition(&s, &Condition::Not(Box::new(both))));
        assert!(evaluate_condition(&s, &Condition::All(vec![])));
        assert!(!evaluate_condition(&s, &Condition::Any(vec![])));
    }

    // ===== RULE SETS =====

    #[test]
    fn player_rules() {
        let controller = player_animation_controller();
        assert_eq!(
            select_animation(&controller, &with_flags(&[signals::GROUNDED])),
            PLAYER_IDLE
        );
        assert_eq!(
            select_animation(&controller, &with_flags(&[signals::GROUNDED, signals::MOVING])),
            PLAYER_RUN
        );
        assert_eq!(
            select_animation(&controller, &with_flags(&[signals::MOVING])),
            PLAYER_JUMP
        );
        assert_eq!(
            select_animation(&controller, &with_flags(&[signals::DEAD])),
            PLAYER_DIE
        );
    }

    #[test]
    fn enemy_rules() {
        let controller = enemy_animation_controller();
        let mut s = Signals::default();
        assert_eq!(select_animation(&controller, &s), ENEMY_IDLE);
        s.set_scalar(signals::SPEED, 40.0);
        assert_eq!(select_animation(&controller, &s), ENEMY_WALK);
        s.set_flag(signals::ATTACKING);
        assert_eq!(select_animation(&controller, &s), ENEMY_ATTACK);
        s.set_flag(signals::DEAD);
        assert_eq!(select_animation(&controller, &s), ENEMY_DIE);
    }
}
