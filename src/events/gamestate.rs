//! Game state transition event and observer.
//!
//! Systems request a transition by setting [`NextGameState`]; triggering
//! [`GameStateChangedEvent`] applies it and runs the enter system registered
//! for the new state in the [`SystemsStore`] (`setup`, `enter_play`,
//! `quit_game`).

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;

#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    let new_state = match next_game_state.get().clone() {
        Pending(state) => state,
        Unchanged => {
            debug!("no state change pending");
            return;
        }
    };
    info!("game state {:?} -> {:?}", game_state.get(), new_state);
    game_state.set(new_state.clone());
    next_game_state.reset();
    on_state_enter(&new_state, &mut commands, &systems_store);
}

/// Name of the system run when entering `state`, if any.
pub fn enter_system_name(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Setup => Some("setup"),
        GameStates::Playing => Some("enter_play"),
        GameStates::Quitting => Some("quit_game"),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(name) = enter_system_name(state) else {
        return;
    };
    match systems_store.get(name) {
        Some(id) => commands.run_system(*id),
        None => warn!("enter system '{}' for {:?} is not registered", name, state),
    }
}
