//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `audio` – bridge to the audio thread and the music/sfx facade
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `contacts` – collider pairs touching last frame
//! - `debugmode` – presence toggles the debug overlay
//! - `fontstore` – loaded fonts (non-send)
//! - `fullscreen` – presence means the window is fullscreen
//! - `gameconfig` – settings read from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame state of the bound keys and the mouse
//! - `level` – level description loaded from JSON
//! - `preferences` – persisted volume values
//! - `rendertarget` – fixed-resolution render texture (non-send)
//! - `rng` – seeded random numbers for gameplay
//! - `screensize` – internal render resolution
//! - `session` – score, kills and the outcome of the current run
//! - `systemsstore` – registry of on-demand systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `uistate` – which panel is shown and whether the game is paused
//! - `volume` – master, music and effects volume
//! - `windowsize` – OS window size and letterboxing
//! - `worldsignals` – global key/value signals
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod audio;
pub mod camera2d;
pub mod contacts;
pub mod debugmode;
pub mod fontstore;
pub mod fullscreen;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod preferences;
pub mod rendertarget;
pub mod rng;
pub mod screensize;
pub mod session;
pub mod systemsstore;
pub mod texturestore;
pub mod uistate;
pub mod volume;
pub mod windowsize;
pub mod worldsignals;
pub mod worldtime;
