//! Persistent key/value store for player preferences.
//!
//! Values are floats kept under a single `[prefs]` section of an INI file.
//! Every [`Preferences::set_float`] writes through to disk so a crash never
//! loses a volume change.

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use rustc_hash::FxHashMap;

use crate::error::{GameError, GameResult};

const SECTION: &str = "prefs";

pub const KEY_VOL_MASTER: &str = "vol_master";
pub const KEY_VOL_MUSIC: &str = "vol_music";
pub const KEY_VOL_SFX: &str = "vol_sfx";

#[derive(Resource, Debug, Clone, Default)]
pub struct Preferences {
    values: FxHashMap<String, f32>,
    path: Option<PathBuf>,
}

impl Preferences {
    /// In-memory store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load preferences from `path`.
    ///
    /// A missing file yields an empty store bound to `path`. Values that do
    /// not parse as floats are skipped with a warning.
    pub fn load(path: impl Into<PathBuf>) -> GameResult<Self> {
        let path = path.into();
        let mut prefs = Self {
            values: FxHashMap::default(),
            path: Some(path.clone()),
        };
        if !path.exists() {
            log::info!("no preferences at {:?}, using defaults", path);
            return Ok(prefs);
        }

        let mut ini = Ini::new();
        let map = ini.load(&path).map_err(|reason| GameError::PrefsLoad {
            path: path.clone(),
            reason,
        })?;
        if let Some(section) = map.get(SECTION) {
            for (key, value) in section {
                let Some(raw) = value else { continue };
                match raw.trim().parse::<f32>() {
                    Ok(v) if v.is_finite() => {
                        prefs.values.insert(key.clone(), v);
                    }
                    _ => log::warn!("ignoring preference {}='{}'", key, raw),
                }
            }
        }
        Ok(prefs)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Store `value` and persist the whole store.
    ///
    /// Save failures are logged; the in-memory value is kept either way.
    pub fn set_float(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value);
        if let Err(e) = self.save() {
            log::warn!("{}", e);
        }
    }

    pub fn save(&self) -> GameResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut ini = Ini::new();
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        for key in keys {
            ini.set(SECTION, key, Some(self.values[key].to_string()));
        }
        ini.write(path).map_err(|e| GameError::PrefsSave {
            path: path.clone(),
            reason: e.to_string(),
        })
    }
}
