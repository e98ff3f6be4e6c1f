//! Master, music and sound-effect volumes.
//!
//! Every setter clamps to `[0, 1]`, persists the value through
//! [`Preferences`] and returns the [`AudioCmd`] that applies it on the audio
//! thread.

use bevy_ecs::prelude::*;

use crate::events::audio::AudioCmd;
use crate::resources::preferences::{KEY_VOL_MASTER, KEY_VOL_MUSIC, KEY_VOL_SFX, Preferences};

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct VolumeSettings {
    pub master: f32,
    pub music: f32,
    pub sfx: f32,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self {
            master: 1.0,
            music: 1.0,
            sfx: 1.0,
        }
    }
}

fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

impl VolumeSettings {
    /// Read the three volumes, defaulting to 1.0 when a key is absent.
    pub fn from_prefs(prefs: &Preferences) -> Self {
        Self {
            master: clamp01(prefs.get_float(KEY_VOL_MASTER, 1.0)),
            music: clamp01(prefs.get_float(KEY_VOL_MUSIC, 1.0)),
            sfx: clamp01(prefs.get_float(KEY_VOL_SFX, 1.0)),
        }
    }

    pub fn set_master(&mut self, value: f32, prefs: &mut Preferences) -> AudioCmd {
        self.master = clamp01(value);
        prefs.set_float(KEY_VOL_MASTER, self.master);
        AudioCmd::MasterVolume { vol: self.master }
    }

    pub fn set_music(&mut self, value: f32, prefs: &mut Preferences) -> AudioCmd {
        self.music = clamp01(value);
        prefs.set_float(KEY_VOL_MUSIC, self.music);
        AudioCmd::MusicVolume { vol: self.music }
    }

    pub fn set_sfx(&mut self, value: f32, prefs: &mut Preferences) -> AudioCmd {
        self.sfx = clamp01(value);
        prefs.set_float(KEY_VOL_SFX, self.sfx);
        AudioCmd::FxVolume { vol: self.sfx }
    }

    /// Commands that push all three volumes to the audio thread.
    pub fn apply_all(&self) -> [AudioCmd; 3] {
        [
            AudioCmd::MasterVolume { vol: self.master },
            AudioCmd::MusicVolume { vol: self.music },
            AudioCmd::FxVolume { vol: self.sfx },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_and_persist() {
        let mut prefs = Preferences::in_memory();
        let mut volumes = VolumeSettings::default();

        assert_eq!(
            volumes.set_master(1.7, &mut prefs),
            AudioCmd::MasterVolume { vol: 1.0 }
        );
        assert_eq!(
            volumes.set_music(-0.3, &mut prefs),
            AudioCmd::MusicVolume { vol: 0.0 }
        );
        assert_eq!(
            volumes.set_sfx(0.4, &mut prefs),
            AudioCmd::FxVolume { vol: 0.4 }
        );

        assert_eq!(prefs.get_float(KEY_VOL_MASTER, -1.0), 1.0);
        assert_eq!(prefs.get_float(KEY_VOL_MUSIC, -1.0), 0.0);
        assert_eq!(prefs.get_float(KEY_VOL_SFX, -1.0), 0.4);
    }

    #[test]
    fn nan_clamps_to_zero() {
        let mut prefs = Preferences::in_memory();
        let mut volumes = VolumeSettings::default();
        volumes.set_sfx(f32::NAN, &mut prefs);
        assert_eq!(volumes.sfx, 0.0);
    }

    #[test]
    fn from_prefs_defaults_to_full_volume() {
        let prefs = Preferences::in_memory();
        assert_eq!(VolumeSettings::from_prefs(&prefs), VolumeSettings::default());
    }

    #[test]
    fn from_prefs_clamps_stored_values() {
        let mut prefs = Preferences::in_memory();
        prefs.set_float(KEY_VOL_MUSIC, 4.0);
        prefs.set_float(KEY_VOL_SFX, 0.5);
        let volumes = VolumeSettings::from_prefs(&prefs);
        assert_eq!(volumes.music, 1.0);
        assert_eq!(volumes.sfx, 0.5);
        assert_eq!(volumes.master, 1.0);
    }
}
