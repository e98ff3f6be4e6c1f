//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup; missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//!
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 120
//!
//! [game]
//! level = ./assets/levels/level01.json
//! prefs = ./prefs.ini
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::{GameError, GameResult};

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 360;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_LEVEL_PATH: &str = "./assets/levels/level01.json";
const DEFAULT_PREFS_PATH: &str = "./prefs.ini";

/// Game configuration resource.
///
/// Stores render resolution, window settings and the paths of the level and
/// preference files. The [`apply_gameconfig_changes`] system pushes changes
/// to the running window.
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Level description loaded when the game scene starts.
    pub level_path: PathBuf,
    /// Where volume preferences are persisted.
    pub prefs_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> GameResult<()> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|reason| GameError::Config {
            path: self.config_path.clone(),
            reason,
        })?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [game] section
        if let Some(level) = config.get("game", "level") {
            self.level_path = PathBuf::from(level);
        }
        if let Some(prefs) = config.get("game", "prefs") {
            self.prefs_path = PathBuf::from(prefs);
        }

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, vsync={}, fullscreen={}, level={:?}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.level_path
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = GameConfig::new();
        assert_eq!(config.render_width, 640);
        assert_eq!(config.render_height, 360);
        assert_eq!(config.target_fps, 120);
        assert!(!config.fullscreen);
        assert_eq!(config.level_path, PathBuf::from(DEFAULT_LEVEL_PATH));
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path("./definitely/not/here/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn partial_file_overrides_only_its_keys() {
        let path = std::env::temp_dir().join("skyhop_config_partial.ini");
        std::fs::write(
            &path,
            "[render]\nwidth = 320\n\n[window]\nvsync = false\n\n[game]\nlevel = levels/custom.json\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.render_width, 320);
        assert_eq!(config.render_height, 360);
        assert!(!config.vsync);
        assert_eq!(config.level_path, PathBuf::from("levels/custom.json"));
        assert_eq!(config.prefs_path, PathBuf::from(DEFAULT_PREFS_PATH));
        let _ = std::fs::remove_file(path);
    }
}
