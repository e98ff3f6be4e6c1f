//! Named countdowns attached to an entity.
//!
//! A [`Timers`] component holds a handful of [`Timer`]s keyed by their
//! signal. When one finishes, [`update_timers`] removes it and triggers a
//! [`TimerEvent`] carrying the entity and the signal. Power-up windows,
//! pickup respawn delays and the player death sequence all run on these.
//!
//! Starting a timer whose signal is already running restarts it, so picking
//! up a second power-up extends the window instead of racing two countdowns.
//!
//! [`update_timers`]: crate::systems::time::update_timers
//! [`TimerEvent`]: crate::events::timer::TimerEvent

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

/// Ends the player's invincibility window.
pub const INVINCIBILITY_END: &str = "invincibility_end";
/// Ends the player's double-jump window.
pub const DOUBLE_JUMP_END: &str = "double_jump_end";
/// Brings a collected power-up back.
pub const PICKUP_RESPAWN: &str = "pickup_respawn";
/// Fires once the player's death animation had time to play.
pub const PLAYER_DEATH: &str = "player_death";

#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub signal: String,
    pub duration: f32,
    pub elapsed: f32,
}

impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
        }
    }

    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct Timers {
    timers: SmallVec<[Timer; 4]>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown named `signal`.
    pub fn start(&mut self, signal: &str, duration: f32) {
        if let Some(timer) = self.timers.iter_mut().find(|t| t.signal == signal) {
            timer.duration = duration;
            timer.elapsed = 0.0;
        } else {
            self.timers.push(Timer::new(duration, signal));
        }
    }

    /// Returns true when a timer was running.
    pub fn cancel(&mut self, signal: &str) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.signal != signal);
        before != self.timers.len()
    }

    pub fn is_running(&self, signal: &str) -> bool {
        self.timers.iter().any(|t| t.signal == signal)
    }

    pub fn remaining(&self, signal: &str) -> Option<f32> {
        self.timers
            .iter()
            .find(|t| t.signal == signal)
            .map(Timer::remaining)
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance every timer and drain the ones that finished, in start order.
    pub fn tick(&mut self, dt: f32) -> SmallVec<[String; 2]> {
        let mut finished = SmallVec::new();
        if dt <= 0.0 {
            return finished;
        }
        for timer in self.timers.iter_mut() {
            timer.elapsed += dt;
        }
        self.timers.retain(|t| {
            if t.finished() {
                finished.push(t.signal.clone());
                false
            } else {
                true
            }
        });
        finished
    }
}
