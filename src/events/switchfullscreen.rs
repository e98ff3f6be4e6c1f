//! Fullscreen toggle (F10).
//!
//! [`switch_fullscreen_observer`] switches the window between windowed mode
//! at the configured size and fullscreen at the monitor size, and keeps the
//! [`FullScreen`] marker resource in sync.

use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::ffi;

use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchFullScreenEvent {}

pub fn switch_fullscreen_observer(
    _trigger: On<SwitchFullScreenEvent>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
    fullscreen: Option<Res<FullScreen>>,
    config: Res<GameConfig>,
) {
    if fullscreen.is_some() {
        commands.remove_resource::<FullScreen>();
        if rl.is_window_fullscreen() {
            rl.toggle_fullscreen();
            let (w, h) = config.window_size();
            rl.set_window_size(w as i32, h as i32);
            rl.restore_window();
        }
        if rl.is_window_fullscreen() {
            error!("could not leave full screen");
        } else {
            info!("windowed mode");
        }
        return;
    }

    commands.insert_resource(FullScreen {});
    if !rl.is_window_fullscreen() {
        let (monitor_width, monitor_height) = unsafe {
            let monitor = ffi::GetCurrentMonitor();
            (ffi::GetMonitorWidth(monitor), ffi::GetMonitorHeight(monitor))
        };
        info!("monitor {}x{}", monitor_width, monitor_height);
        rl.maximize_window();
        rl.set_window_size(monitor_width, monitor_height);
        rl.toggle_fullscreen();
    }
    if rl.is_window_fullscreen() {
        info!("full screen mode");
    } else {
        error!("could not enter full screen");
    }
}
