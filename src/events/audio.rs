//! Messages exchanged with the background audio thread.
//!
//! Gameplay and UI systems write [`AudioCmd`] messages; the bridge systems in
//! [`crate::systems::audio`] forward them to the audio thread, which answers
//! with [`AudioMessage`]s.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    UnloadMusic { id: String },
    UnloadAllMusic,
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    PauseMusic { id: String },
    ResumeMusic { id: String },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    UnloadFx { id: String },
    UnloadAllFx,
    /// Global output volume, already clamped to `[0, 1]`.
    MasterVolume { vol: f32 },
    /// Volume applied to every music track, current and future.
    MusicVolume { vol: f32 },
    /// Volume applied to every sound effect, current and future.
    FxVolume { vol: f32 },
    Shutdown,
}

/// Events sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicUnloaded { id: String },
    MusicUnloadedAll,
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicFinished { id: String }, // reached end for non looping
    FxLoaded { id: String },
    FxUnloaded { id: String },
    FxUnloadedAll,
    FxLoadFailed { id: String, error: String },
    FxFinished { id: String },
    VolumeChanged { channel: VolumeChannel, vol: f32 },
}

/// Which mixer channel a volume change applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeChannel {
    Master,
    Music,
    Fx,
}
