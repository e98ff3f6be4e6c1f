//! Input action events.
//!
//! [`InputEvent`] is triggered when a gameplay or menu action is pressed or
//! released. Observers (menus, pause) react to these instead of polling
//! [`InputState`](crate::resources::input::InputState).

use bevy_ecs::prelude::*;

/// Logical input actions, independent of the physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Left,
    Right,
    Up,
    Down,
    Jump,
    Fire,
    Confirm,
    Pause,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: InputAction,
    /// Press (true) or release (false).
    pub pressed: bool,
}

impl InputEvent {
    pub fn pressed(action: InputAction) -> Self {
        Self {
            action,
            pressed: true,
        }
    }
}
