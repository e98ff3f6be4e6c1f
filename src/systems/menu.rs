//! Menu and UI systems.
//!
//! - [`menu_controller_observer`] – Up/Down select, Left/Right move sliders,
//!   Confirm triggers a [`MenuSelectionEvent`]
//! - [`menu_selection_observer`] – performs the selected [`MenuAction`]
//! - [`pause_observer`] – the pause key in the game scene, Back in the menu
//! - [`run_ended_observer`] – shows the game over or victory panel
//!
//! All of them are input or event driven, so they keep working while the
//! time scale is zero.

use bevy_ecs::prelude::*;

use crate::components::menu::{Menu, MenuAction, MenuItemKind, Panel, VolumeSlider};
use crate::events::audio::AudioCmd;
use crate::events::gameplay::RunEndedEvent;
use crate::events::input::{InputAction, InputEvent};
use crate::events::menu::MenuSelectionEvent;
use crate::resources::audio::AudioManager;
use crate::resources::gamestate::GameStates::Quitting;
use crate::resources::gamestate::NextGameState;
use crate::resources::preferences::Preferences;
use crate::resources::session::GameSession;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::uistate::{PauseTransition, UiState};
use crate::resources::volume::VolumeSettings;
use crate::resources::worldsignals::{self, WorldSignals};
use crate::resources::worldtime::WorldTime;

pub const SLIDER_STEP: f32 = 0.1;
pub const SFX_MENU_MOVE: &str = "menu_move";
pub const SFX_MENU_SELECT: &str = "menu_select";
pub const SFX_DEFEAT: &str = "defeat";
pub const SFX_VICTORY: &str = "victory";

fn show_only<'a>(active: Option<Panel>, menus: impl Iterator<Item = Mut<'a, Menu>>) -> bool {
    let mut found = active.is_none();
    for mut menu in menus {
        let visible = active == Some(menu.panel);
        found |= visible;
        if menu.visible != visible {
            menu.visible = visible;
        }
    }
    if !found {
        log::warn!("panel {:?} not found in this scene", active);
    }
    found
}

/// Make the panel named by `ui.active_panel` the only visible one.
///
/// Returns false (with a warning) when no entity carries that panel.
pub fn sync_panels(ui: &UiState, menus: &mut Query<&mut Menu>) -> bool {
    show_only(ui.active_panel, menus.iter_mut())
}

/// [`sync_panels`] for exclusive systems.
pub fn sync_panels_in_world(world: &mut World) -> bool {
    let active = world.resource::<UiState>().active_panel;
    let mut menus = world.query::<&mut Menu>();
    show_only(active, menus.iter_mut(world))
}

/// Set a volume channel and return the command for the audio thread.
pub fn apply_slider(
    slider: VolumeSlider,
    value: f32,
    volume: &mut VolumeSettings,
    prefs: &mut Preferences,
) -> AudioCmd {
    match slider {
        VolumeSlider::Master => volume.set_master(value, prefs),
        VolumeSlider::Music => volume.set_music(value, prefs),
        VolumeSlider::Sfx => volume.set_sfx(value, prefs),
    }
}

pub fn slider_volume(slider: VolumeSlider, volume: &VolumeSettings) -> f32 {
    match slider {
        VolumeSlider::Master => volume.master,
        VolumeSlider::Music => volume.music,
        VolumeSlider::Sfx => volume.sfx,
    }
}

fn copy_volumes<'a>(volume: &VolumeSettings, menus: impl Iterator<Item = Mut<'a, Menu>>) {
    for mut menu in menus {
        for slider in [VolumeSlider::Master, VolumeSlider::Music, VolumeSlider::Sfx] {
            menu.set_slider(slider, slider_volume(slider, volume));
        }
    }
}

/// Copy the current volumes into every slider.
pub fn sync_sliders(volume: &VolumeSettings, menus: &mut Query<&mut Menu>) {
    copy_volumes(volume, menus.iter_mut());
}

pub fn sync_sliders_in_world(world: &mut World) {
    let volume = *world.resource::<VolumeSettings>();
    let mut menus = world.query::<&mut Menu>();
    copy_volumes(&volume, menus.iter_mut(world));
}

fn run_stored_system(commands: &mut Commands, store: &SystemsStore, name: &str) {
    match store.get(name) {
        Some(id) => commands.run_system(*id),
        None => log::warn!("system '{}' not registered", name),
    }
}

/// Handles input events to navigate the visible panel.
pub fn menu_controller_observer(
    trigger: On<InputEvent>,
    ui: Res<UiState>,
    mut menus: Query<&mut Menu>,
    mut volume: ResMut<VolumeSettings>,
    mut prefs: ResMut<Preferences>,
    audio: Res<AudioManager>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    let Some(panel) = ui.active_panel else {
        return;
    };
    let Some(mut menu) = menus.iter_mut().find(|m| m.panel == panel) else {
        return;
    };

    match event.action {
        InputAction::Up => {
            if menu.select_prev() {
                audio_cmds.write_batch(audio.play_sfx(SFX_MENU_MOVE));
            }
        }
        InputAction::Down => {
            if menu.select_next() {
                audio_cmds.write_batch(audio.play_sfx(SFX_MENU_MOVE));
            }
        }
        InputAction::Left | InputAction::Right => {
            let Some(MenuItemKind::Slider(slider, value)) = menu.selected().map(|i| i.kind) else {
                return;
            };
            let step = if event.action == InputAction::Left {
                -SLIDER_STEP
            } else {
                SLIDER_STEP
            };
            let cmd = apply_slider(slider, value + step, &mut volume, &mut prefs);
            audio_cmds.write(cmd);
            let stored = slider_volume(slider, &volume);
            menu.set_slider(slider, stored);
        }
        InputAction::Confirm => {
            if let Some(MenuItemKind::Button(action)) = menu.selected().map(|i| i.kind) {
                audio_cmds.write_batch(audio.play_sfx(SFX_MENU_SELECT));
                commands.trigger(MenuSelectionEvent { panel, action });
            }
        }
        _ => {}
    }
}

/// Executes the action behind a confirmed button.
pub fn menu_selection_observer(
    trigger: On<MenuSelectionEvent>,
    mut ui: ResMut<UiState>,
    mut menus: Query<&mut Menu>,
    volume: Res<VolumeSettings>,
    mut time: ResMut<WorldTime>,
    mut world_signals: ResMut<WorldSignals>,
    mut next_game_state: ResMut<NextGameState>,
    systems_store: Res<SystemsStore>,
    mut commands: Commands,
) {
    let event = trigger.event();
    log::debug!("menu action {:?} on {:?}", event.action, event.panel);
    match event.action {
        MenuAction::Play => {
            world_signals.set_string(worldsignals::SCENE, "game");
            run_stored_system(&mut commands, &systems_store, "switch_scene");
        }
        MenuAction::ShowOptions => {
            sync_sliders(&volume, &mut menus);
            ui.active_panel = Some(Panel::Options);
            sync_panels(&ui, &mut menus);
        }
        MenuAction::ShowCredits => {
            ui.active_panel = Some(Panel::Credits);
            sync_panels(&ui, &mut menus);
        }
        MenuAction::Quit => next_game_state.set(Quitting),
        MenuAction::Back => {
            ui.active_panel = Some(ui.back_target());
            sync_panels(&ui, &mut menus);
        }
        MenuAction::Resume => {
            ui.resume();
            time.time_scale = 1.0;
            sync_panels(&ui, &mut menus);
        }
        MenuAction::ToMenu => {
            world_signals.set_string(worldsignals::SCENE, "menu");
            run_stored_system(&mut commands, &systems_store, "switch_scene");
        }
        MenuAction::Retry => {
            run_stored_system(&mut commands, &systems_store, "switch_scene");
        }
    }
}

/// Pause key: toggles pause in the game scene, acts as Back in the menu.
pub fn pause_observer(
    trigger: On<InputEvent>,
    mut ui: ResMut<UiState>,
    mut menus: Query<&mut Menu>,
    session: Res<GameSession>,
    mut time: ResMut<WorldTime>,
) {
    let event = trigger.event();
    if event.action != InputAction::Pause || !event.pressed {
        return;
    }
    if ui.is_menu_scene {
        if matches!(ui.active_panel, Some(Panel::Options | Panel::Credits)) {
            ui.active_panel = Some(ui.back_target());
            sync_panels(&ui, &mut menus);
        }
        return;
    }
    match ui.toggle_pause(session.is_finished()) {
        PauseTransition::Ignored => return,
        PauseTransition::Paused => time.time_scale = 0.0,
        PauseTransition::Resumed => time.time_scale = 1.0,
        PauseTransition::BackToPause => {}
    }
    sync_panels(&ui, &mut menus);
}

/// Freeze the game and show the end-of-run panel.
pub fn run_ended_observer(
    trigger: On<RunEndedEvent>,
    mut ui: ResMut<UiState>,
    mut menus: Query<&mut Menu>,
    session: Res<GameSession>,
    mut time: ResMut<WorldTime>,
    mut audio: ResMut<AudioManager>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    time.time_scale = 0.0;
    ui.paused = false;
    ui.return_panel = None;
    audio_cmds.write_batch(audio.stop_music());
    let panel = match trigger.event() {
        RunEndedEvent::GameOver => {
            audio_cmds.write_batch(audio.play_sfx(SFX_DEFEAT));
            Panel::GameOver
        }
        RunEndedEvent::Victory => {
            audio_cmds.write_batch(audio.play_sfx(SFX_VICTORY));
            let summary = session.summary();
            for mut menu in menus.iter_mut().filter(|m| m.panel == Panel::Victory) {
                menu.message = Some(summary.clone());
            }
            Panel::Victory
        }
    };
    ui.active_panel = Some(panel);
    sync_panels(&ui, &mut menus);
}
