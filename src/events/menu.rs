use bevy_ecs::prelude::*;

use crate::components::menu::{MenuAction, Panel};

/// A menu button was confirmed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSelectionEvent {
    pub panel: Panel,
    pub action: MenuAction,
}
