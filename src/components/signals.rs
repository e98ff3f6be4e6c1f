//! Per-entity signal storage read by the animation controller.
//!
//! Gameplay systems publish state (`grounded`, `moving`, `dead`, `speed`, ...)
//! here instead of touching animation directly.

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

pub const GROUNDED: &str = "grounded";
pub const MOVING: &str = "moving";
pub const DEAD: &str = "dead";
pub const ATTACKING: &str = "attacking";
pub const INVINCIBLE: &str = "invincible";
pub const ANIMATION_ENDED: &str = "animation_ended";
pub const SPEED: &str = "speed";

#[derive(Debug, Clone, Component, Default)]
pub struct Signals {
    pub scalars: FxHashMap<String, f32>,
    pub flags: FxHashSet<String>,
}

impl Signals {
    pub fn set_scalar(&mut self, key: &str, value: f32) {
        self.scalars.insert(key.to_string(), value);
    }
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    pub fn set_flag(&mut self, key: &str) {
        self.flags.insert(key.to_string());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Set or clear `key` depending on `on`.
    pub fn set_flag_to(&mut self, key: &str, on: bool) {
        if on {
            self.set_flag(key);
        } else {
            self.clear_flag(key);
        }
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
