//! Score keeping and win/lose state for the running game scene.
//!
//! Victory is reached once the score covers every coin and enough enemies
//! were killed. The check only runs when the score or the kill count changes,
//! and either outcome can happen at most once per scene.

use bevy_ecs::prelude::Resource;

use crate::resources::worldsignals::WorldSignals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    GameOver,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameSession {
    pub total_coins: i32,
    pub total_enemies: i32,
    pub score: i32,
    pub coins: i32,
    pub enemies_killed: i32,
    pub game_over: bool,
    pub victory: bool,
}

impl GameSession {
    pub fn new(total_coins: i32, total_enemies: i32) -> Self {
        Self {
            total_coins: total_coins.max(0),
            total_enemies: total_enemies.max(0),
            ..Default::default()
        }
    }

    /// Returns `Some(Outcome::Victory)` when this coin won the game.
    pub fn add_coin(&mut self) -> Option<Outcome> {
        if self.is_finished() {
            return None;
        }
        self.coins += 1;
        self.score += 1;
        self.check_victory()
    }

    pub fn add_score(&mut self, value: i32) -> Option<Outcome> {
        if self.is_finished() {
            return None;
        }
        self.score += value;
        self.check_victory()
    }

    pub fn enemy_killed(&mut self) -> Option<Outcome> {
        if self.is_finished() {
            return None;
        }
        self.enemies_killed += 1;
        self.check_victory()
    }

    fn check_victory(&mut self) -> Option<Outcome> {
        if self.is_finished() {
            return None;
        }
        if self.score >= self.total_coins && self.enemies_killed >= self.total_enemies {
            self.victory = true;
            log::info!(
                "victory: score {}/{} enemies {}/{}",
                self.score,
                self.total_coins,
                self.enemies_killed,
                self.total_enemies
            );
            return Some(Outcome::Victory);
        }
        None
    }

    /// Returns `Some(Outcome::GameOver)` the first time only.
    pub fn set_game_over(&mut self) -> Option<Outcome> {
        if self.is_finished() {
            return None;
        }
        self.game_over = true;
        log::info!("game over with score {}", self.score);
        Some(Outcome::GameOver)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_finished(&self) -> bool {
        self.game_over || self.victory
    }

    pub fn summary(&self) -> String {
        format!(
            "Coins {}/{}  Enemies {}/{}",
            self.coins, self.total_coins, self.enemies_killed, self.total_enemies
        )
    }

    /// Mirror the counters into `signals` for the HUD.
    pub fn publish(&self, signals: &mut WorldSignals) {
        signals.set_integer("score", self.score);
        signals.set_integer("coins", self.coins);
        signals.set_integer("total_coins", self.total_coins);
        signals.set_integer("enemies_killed", self.enemies_killed);
        signals.set_integer("total_enemies", self.total_enemies);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn victory_needs_both_thresholds() {
        let mut session = GameSession::new(2, 1);
        assert_eq!(session.add_coin(), None);
        assert_eq!(session.add_coin(), None);
        assert_eq!(session.enemy_killed(), Some(Outcome::Victory));
        assert!(session.victory);
    }

    #[test]
    fn victory_fires_once() {
        let mut session = GameSession::new(1, 0);
        assert_eq!(session.add_coin(), Some(Outcome::Victory));
        assert_eq!(session.add_score(5), None);
        assert_eq!(session.enemy_killed(), None);
        assert_eq!(session.score, 1);
    }

    #[test]
    fn game_over_fires_once_and_blocks_victory() {
        let mut session = GameSession::new(1, 0);
        assert_eq!(session.set_game_over(), Some(Outcome::GameOver));
        assert_eq!(session.set_game_over(), None);
        assert_eq!(session.add_coin(), None);
        assert!(!session.victory);
        assert!(session.is_game_over());
    }

    #[test]
    fn publish_mirrors_counters() {
        let mut session = GameSession::new(3, 4);
        session.add_coin();
        session.enemy_killed();
        let mut signals = WorldSignals::default();
        session.publish(&mut signals);
        assert_eq!(signals.get_integer("coins"), Some(1));
        assert_eq!(signals.get_integer("enemies_killed"), Some(1));
        assert_eq!(signals.get_integer("total_enemies"), Some(4));
    }
}
