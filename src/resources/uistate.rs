//! Which panel is showing and whether the game is paused.
//!
//! The transitions are plain methods returning what changed; the menu
//! systems apply them to the panel entities and to the time scale.

use bevy_ecs::prelude::Resource;

use crate::components::menu::Panel;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_panel: Option<Panel>,
    pub paused: bool,
    /// Panel the options screen returns to.
    pub return_panel: Option<Panel>,
    pub is_menu_scene: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseTransition {
    /// Menu scene or the run already ended.
    Ignored,
    Paused,
    /// Options were open on top of the pause panel.
    BackToPause,
    Resumed,
}

impl UiState {
    pub fn menu_scene() -> Self {
        Self {
            active_panel: Some(Panel::Title),
            is_menu_scene: true,
            ..Default::default()
        }
    }

    pub fn game_scene() -> Self {
        Self::default()
    }

    /// Apply a pause key press. `run_finished` is true after game over or
    /// victory.
    pub fn toggle_pause(&mut self, run_finished: bool) -> PauseTransition {
        if self.is_menu_scene || run_finished {
            return PauseTransition::Ignored;
        }
        if !self.paused {
            self.paused = true;
            self.active_panel = Some(Panel::Pause);
            self.return_panel = Some(Panel::Pause);
            PauseTransition::Paused
        } else if self.active_panel == Some(Panel::Options)
            && self.return_panel == Some(Panel::Pause)
        {
            self.active_panel = Some(Panel::Pause);
            PauseTransition::BackToPause
        } else {
            self.resume();
            PauseTransition::Resumed
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.active_panel = None;
        self.return_panel = None;
    }

    /// Panel the Back button leads to from the current one.
    pub fn back_target(&self) -> Panel {
        match self.active_panel {
            Some(Panel::Options) if self.paused && self.return_panel == Some(Panel::Pause) => {
                Panel::Pause
            }
            _ => Panel::Title,
        }
    }
}
