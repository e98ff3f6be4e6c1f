//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is the world-wide blackboard: the current
//! scene name, the `quit_game` flag and the counters the HUD displays
//! (`score`, `coins`, `total_coins`, `enemies_killed`, `total_enemies`).

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

pub const SCENE: &str = "scene";
pub const QUIT_GAME: &str = "quit_game";

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    pub strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
