//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`poll_audio_messages`] non-blockingly drains the audio thread's event
//!   receiver into the ECS message queue each frame.
//! - [`forward_audio_cmds`] pushes every [`AudioCmd`] written this frame to
//!   the audio thread.
//!
//! Raylib audio API calls stay on a single thread; the main game thread only
//! talks to it through channels.
//!
//! Notes
//! - Unknown ids are logged and ignored; gameplay never blocks on audio.
//! - Music streaming requires periodic `update_stream()` calls; this loop takes
//!   care of it while tracks are playing.
//! - The music and fx channel volumes are remembered by the thread and applied
//!   to tracks and sounds loaded later.

use crate::events::audio::{AudioCmd, AudioMessage, VolumeChannel};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain any pending events from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
///
/// Run this after [`poll_audio_messages`] in the schedule.
pub fn update_bevy_audio_messages(mut events: ResMut<Messages<AudioMessage>>) {
    events.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Log load failures reported by the audio thread.
pub fn log_audio_failures(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                log::warn!("music '{}' could not be loaded: {}", id, error);
            }
            AudioMessage::FxLoadFailed { id, error } => {
                log::warn!("sound '{}' could not be loaded: {}", id, error);
            }
            _ => {}
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns every `Music` and `Sound` handle for the life of the thread and
/// reacts to [`AudioCmd`] inputs. Blocks until it receives
/// [`AudioCmd::Shutdown`], at which point it unloads resources and exits.
///
/// When no audio device is available the thread keeps draining commands so
/// the game can still run silently.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            log::error!("[audio] no audio device ({}), running silent", e);
            for cmd in rx_cmd.iter() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    break;
                }
            }
            return;
        }
    };

    log::info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut fx_playing: FxHashSet<String> = FxHashSet::default();
    let mut music_volume = 1.0_f32;
    let mut fx_volume = 1.0_f32;

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        log::debug!("[audio] loaded id='{}' path='{}'", id, path);
                        music.set_volume(music_volume);
                        musics.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        log::debug!("[audio] play start id='{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    } else {
                        log::warn!("[audio] play skipped id='{}' reason='not loaded'", id);
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        log::debug!("[audio] stop id='{}'", id);
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::PauseMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.pause_stream();
                        playing.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::ResumeMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.resume_stream();
                        playing.insert(id.clone());
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    }
                }
                AudioCmd::UnloadMusic { id } => {
                    if musics.remove(&id).is_some() {
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicUnloaded { id });
                    }
                }
                AudioCmd::UnloadAllMusic => {
                    musics.clear();
                    playing.clear();
                    looped.clear();
                    let _ = tx_evt.send(AudioMessage::MusicUnloadedAll);
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        log::debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                        sound.set_volume(fx_volume);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                        fx_playing.insert(id);
                    } else {
                        log::warn!("[audio] fx play skipped id='{}' reason='not loaded'", id);
                    }
                }
                AudioCmd::UnloadFx { id } => {
                    if sounds.remove(&id).is_some() {
                        fx_playing.remove(&id);
                        let _ = tx_evt.send(AudioMessage::FxUnloaded { id });
                    }
                }
                AudioCmd::UnloadAllFx => {
                    sounds.clear();
                    fx_playing.clear();
                    let _ = tx_evt.send(AudioMessage::FxUnloadedAll);
                }
                AudioCmd::MasterVolume { vol } => {
                    audio.set_master_volume(vol);
                    let _ = tx_evt.send(AudioMessage::VolumeChanged {
                        channel: VolumeChannel::Master,
                        vol,
                    });
                }
                AudioCmd::MusicVolume { vol } => {
                    music_volume = vol;
                    for music in musics.values() {
                        music.set_volume(vol);
                    }
                    let _ = tx_evt.send(AudioMessage::VolumeChanged {
                        channel: VolumeChannel::Music,
                        vol,
                    });
                }
                AudioCmd::FxVolume { vol } => {
                    fx_volume = vol;
                    for sound in sounds.values() {
                        sound.set_volume(vol);
                    }
                    let _ = tx_evt.send(AudioMessage::VolumeChanged {
                        channel: VolumeChannel::Fx,
                        vol,
                    });
                }
                AudioCmd::Shutdown => {
                    log::info!("[audio] shutdown requested");
                    musics.clear();
                    playing.clear();
                    looped.clear();
                    let _ = tx_evt.send(AudioMessage::MusicUnloadedAll);
                    sounds.clear();
                    fx_playing.clear();
                    let _ = tx_evt.send(AudioMessage::FxUnloadedAll);
                    break 'run;
                }
            }
        }
        // 2) Pump streaming + detect ends
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    let len = music.get_time_length();
                    let played = music.get_time_played();
                    if played >= len - 0.01 {
                        ended.push(id.clone());
                    }
                }
            }
        }
        for id in ended.iter() {
            if looped.contains(id) {
                if let Some(music) = musics.get(id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                    let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id: id.clone() });
                }
            } else {
                playing.remove(id);
                let _ = tx_evt.send(AudioMessage::MusicFinished { id: id.clone() });
            }
        }

        let fx_ended: Vec<String> = fx_playing
            .iter()
            .filter(|id| {
                !sounds
                    .get(id.as_str())
                    .map(|sound| sound.is_playing())
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        for id in fx_ended {
            fx_playing.remove(&id);
            let _ = tx_evt.send(AudioMessage::FxFinished { id });
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    } // 'run

    log::info!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );

    // musics and sounds drop before `audio`
    drop(musics);
    drop(sounds);
}
