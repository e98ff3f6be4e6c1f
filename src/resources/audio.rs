//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and `Messages<AudioMessage>` resources. Call
//! [`shutdown_audio`] during teardown to gracefully stop the thread and free
//! audio resources.
//!
//! [`AudioManager`] is the game-facing facade: it remembers which music track
//! is current and turns "play this track" requests into the command sequence
//! the audio thread understands.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use smallvec::SmallVec;

/// Shared bridge between the ECS world and the audio thread.
///
/// This resource is created by [`setup_audio`]. Systems can send commands via
/// [`AudioBridge::tx_cmd`] and poll for events via [`AudioBridge::rx_msg`].
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the audio thread and register bridge resources.
///
/// This function:
/// - Creates command/event channels.
/// - Spawns the background thread running [`audio_thread`].
/// - Inserts [`AudioBridge`], [`AudioManager`] and the two message queues so
///   that systems can send commands and poll for events.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(AudioManager::default());
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Gracefully request shutdown of the audio thread and join it.
///
/// If the bridge resource exists, sends [`AudioCmd::Shutdown`], waits for the
/// thread to exit, and removes the resource from the world.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}

/// Commands produced by a single [`AudioManager`] call.
pub type AudioCmds = SmallVec<[AudioCmd; 2]>;

/// Tracks the music channel so only one track plays at a time.
///
/// Methods return the commands to write; callers pass them to
/// `MessageWriter::write_batch`.
#[derive(Resource, Debug, Default)]
pub struct AudioManager {
    current_music: Option<String>,
}

impl AudioManager {
    pub fn current_music(&self) -> Option<&str> {
        self.current_music.as_deref()
    }

    /// Stop whatever is playing and start `id`.
    ///
    /// An empty id is treated as a missing clip and skipped.
    pub fn play_music(&mut self, id: &str, looped: bool) -> AudioCmds {
        let mut cmds = AudioCmds::new();
        if id.is_empty() {
            log::warn!("play_music called without a track, skipping");
            return cmds;
        }
        if let Some(previous) = self.current_music.take() {
            cmds.push(AudioCmd::StopMusic { id: previous });
        }
        cmds.push(AudioCmd::PlayMusic {
            id: id.to_string(),
            looped,
        });
        self.current_music = Some(id.to_string());
        cmds
    }

    pub fn stop_music(&mut self) -> AudioCmds {
        let mut cmds = AudioCmds::new();
        if let Some(previous) = self.current_music.take() {
            cmds.push(AudioCmd::StopMusic { id: previous });
        }
        cmds
    }

    pub fn play_sfx(&self, id: &str) -> AudioCmds {
        let mut cmds = AudioCmds::new();
        if id.is_empty() {
            log::warn!("play_sfx called without a clip, skipping");
            return cmds;
        }
        cmds.push(AudioCmd::PlayFx { id: id.to_string() });
        cmds
    }
}
