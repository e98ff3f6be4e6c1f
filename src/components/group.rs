//! Named grouping tag used by collision rules and queries.

use bevy_ecs::prelude::Component;

pub const PLAYER: &str = "player";
pub const ENEMY: &str = "enemy";
pub const BULLET: &str = "bullet";
pub const PICKABLE: &str = "pickable";
pub const SOLID: &str = "solid";
pub const SCENERY: &str = "scenery";
pub const UI: &str = "ui";

#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}
