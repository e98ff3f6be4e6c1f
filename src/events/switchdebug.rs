//! Debug overlay toggle (F11).
//!
//! The observer flips the presence of the [`DebugMode`] resource; the
//! renderer draws the overlay while it exists.

use bevy_ecs::prelude::*;

use crate::resources::debugmode::DebugMode;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        log::info!("debug overlay off");
    } else {
        commands.insert_resource(DebugMode {});
        log::info!("debug overlay on");
    }
}
