//! Crate-wide error type.
//!
//! File-level failures (preferences, config, level data, render target) are
//! reported through [`GameError`]. Callers at the top of the program log them
//! and fall back to defaults so a missing file never stops the game.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read preferences from {path:?}: {reason}")]
    PrefsLoad { path: PathBuf, reason: String },

    #[error("failed to write preferences to {path:?}: {reason}")]
    PrefsSave { path: PathBuf, reason: String },

    #[error("failed to load config file {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("failed to read level file {path:?}: {source}")]
    LevelIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse level file {path:?}: {source}")]
    LevelParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("render target: {0}")]
    RenderTarget(String),
}

pub type GameResult<T> = Result<T, GameError>;
