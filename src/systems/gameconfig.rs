//! Applies [`GameConfig`] changes to the running window.
//!
//! Runs every frame but only acts when the resource was added or changed:
//! render target size, fullscreen state, vsync and target fps.

use bevy_ecs::prelude::*;
use raylib::ffi;

use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;

pub fn apply_gameconfig_changes(
    config: Res<GameConfig>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut render_target: NonSendMut<RenderTarget>,
    mut screen_size: ResMut<ScreenSize>,
    fullscreen: Option<Res<FullScreen>>,
    mut commands: Commands,
) {
    if !config.is_changed() {
        return;
    }

    if render_target.game_width != config.render_width
        || render_target.game_height != config.render_height
    {
        log::info!(
            "render target {}x{} -> {}x{}",
            render_target.game_width,
            render_target.game_height,
            config.render_width,
            config.render_height
        );
        match render_target.recreate(&mut rl, &th, config.render_width, config.render_height) {
            Ok(()) => {
                screen_size.w = config.render_width as i32;
                screen_size.h = config.render_height as i32;
            }
            Err(e) => log::error!("{}", e),
        }
    }

    if config.fullscreen != fullscreen.is_some() {
        commands.trigger(SwitchFullScreenEvent {});
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }
    rl.set_target_fps(config.target_fps);
    log::debug!("config applied: vsync {} fps {}", config.vsync, config.target_fps);
}
