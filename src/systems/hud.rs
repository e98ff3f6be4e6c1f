//! HUD refresh.
//!
//! Heart sprites follow the player's [`PlayerHealth`]; the text counters
//! follow the [`GameSession`] and the player's power-up timers. Components are
//! only written when their content actually changes.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::components::dynamictext::DynamicText;
use crate::components::hud::{HeartSlot, HudText};
use crate::components::player::{HeartState, PlayerController, PlayerHealth};
use crate::components::sprite::Sprite;
use crate::components::timer::{self, Timers};
use crate::resources::session::GameSession;

pub fn heart_texture(state: HeartState) -> (&'static str, Color) {
    match state {
        HeartState::Full => ("heart_full", Color::RED),
        HeartState::Half => ("heart_half", Color::ORANGE),
        HeartState::Empty => ("heart_empty", Color::DARKGRAY),
    }
}

/// Text of the power-up line, empty when nothing is active.
pub fn power_up_text(timers: &Timers) -> String {
    let mut parts = Vec::new();
    if let Some(left) = timers.remaining(timer::INVINCIBILITY_END) {
        parts.push(format!("Invincible {:.1}s", left));
    }
    if let Some(left) = timers.remaining(timer::DOUBLE_JUMP_END) {
        parts.push(format!("Double jump {:.1}s", left));
    }
    parts.join("  ")
}

pub fn hud_system(
    players: Query<(&PlayerHealth, &Timers), With<PlayerController>>,
    mut hearts: Query<(&HeartSlot, &mut Sprite)>,
    mut texts: Query<(&HudText, &mut DynamicText)>,
    session: Res<GameSession>,
) {
    let player = players.iter().next();

    if let Some((health, _)) = player {
        for (slot, mut sprite) in hearts.iter_mut() {
            let (tex_key, color) = heart_texture(health.heart(slot.0));
            if sprite.tex_key != tex_key {
                sprite.tex_key = tex_key.to_string();
                sprite.fallback_color = color;
            }
        }
    }

    for (kind, mut text) in texts.iter_mut() {
        let content = match kind {
            HudText::Coins => format!("Coins {}/{}", session.coins, session.total_coins),
            HudText::Kills => format!(
                "Kills {}/{}",
                session.enemies_killed, session.total_enemies
            ),
            HudText::PowerUps => player
                .map(|(_, timers)| power_up_text(timers))
                .unwrap_or_default(),
        };
        if text.content != content {
            text.set_content(content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_up_line_lists_running_timers() {
        let mut timers = Timers::new();
        assert_eq!(power_up_text(&timers), "");
        timers.start(timer::INVINCIBILITY_END, 3.0);
        timers.start(timer::DOUBLE_JUMP_END, 5.0);
        assert_eq!(power_up_text(&timers), "Invincible 3.0s  Double jump 5.0s");
    }

    #[test]
    fn heart_textures() {
        assert_eq!(heart_texture(HeartState::Half).0, "heart_half");
    }
}
