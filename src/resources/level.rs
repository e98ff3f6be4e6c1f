//! Level description loaded from JSON.
//!
//! ```json
//! {
//!   "name": "Meadow",
//!   "music": "game",
//!   "player": { "x": 64, "y": 280 },
//!   "solids": [ { "x": 0, "y": 300, "w": 2400, "h": 60 } ],
//!   "coins": [ { "x": 200, "y": 260 } ],
//!   "power_ups": [ { "kind": "DoubleJumpPowerUp", "value": 8,
//!                    "area_min": { "x": 300, "y": 150 }, "area_max": { "x": 900, "y": 250 } } ],
//!   "spawners": [ { "x": 1200, "y": 150 } ],
//!   "total_enemies": 8
//! }
//! ```
//!
//! Every field has a default, so partial files are accepted.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::parallax::FitMode;
use crate::components::pickable::{DEFAULT_RESPAWN_TIME, PickableKind};
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec(self) -> Vector2 {
        Vector2 {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpData {
    pub kind: PickableKind,
    pub value: f32,
    #[serde(default = "default_respawn_time")]
    pub respawn_time: f32,
    pub area_min: Point,
    pub area_max: Point,
}

fn default_respawn_time() -> f32 {
    DEFAULT_RESPAWN_TIME
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyData {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub speed: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerData {
    pub x: f32,
    pub y: f32,
    pub interval: f32,
    pub area_w: f32,
    pub area_h: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub max_alive: usize,
}

impl Default for SpawnerData {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            interval: 2.0,
            area_w: 320.0,
            area_h: 160.0,
            min_speed: 32.0,
            max_speed: 96.0,
            max_alive: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxData {
    pub texture: String,
    /// Image size, used when the texture is missing.
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub z: i32,
    pub parallax_x: f32,
    pub parallax_y: f32,
    pub fit_mode: FitMode,
    pub keep_aspect: bool,
    pub align_bottom: bool,
    pub bottom_offset: f32,
    pub scale_multiplier: f32,
    pub loop_x: bool,
    /// RGBA fill used when the texture is missing.
    pub color: [u8; 4],
}

impl Default for ParallaxData {
    fn default() -> Self {
        Self {
            texture: String::new(),
            width: 320.0,
            height: 180.0,
            x: 320.0,
            y: 180.0,
            z: -10,
            parallax_x: 0.2,
            parallax_y: 0.0,
            fit_mode: FitMode::Cover,
            keep_aspect: true,
            align_bottom: false,
            bottom_offset: 0.0,
            scale_multiplier: 1.0,
            loop_x: true,
            color: [40, 44, 80, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelData {
    pub name: String,
    pub music: String,
    pub camera_offset_y: f32,
    pub player: Point,
    pub solids: Vec<Rect>,
    pub coins: Vec<Point>,
    pub power_ups: Vec<PowerUpData>,
    pub enemies: Vec<EnemyData>,
    pub spawners: Vec<SpawnerData>,
    pub parallax: Vec<ParallaxData>,
    pub total_enemies: i32,
    /// Defaults to the number of coins placed in the level.
    pub total_coins: Option<i32>,
}

impl Default for LevelData {
    fn default() -> Self {
        Self {
            name: "Untitled".into(),
            music: "game".into(),
            camera_offset_y: 180.0,
            player: Point::new(64.0, 280.0),
            solids: Vec::new(),
            coins: Vec::new(),
            power_ups: Vec::new(),
            enemies: Vec::new(),
            spawners: Vec::new(),
            parallax: Vec::new(),
            total_enemies: 0,
            total_coins: None,
        }
    }
}

impl LevelData {
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GameError::LevelIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| GameError::LevelParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load `path`, falling back to [`LevelData::builtin`] with a warning.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(level) => {
                log::info!("loaded level '{}'", level.name);
                level
            }
            Err(e) => {
                log::warn!("{}; using the built-in level", e);
                Self::builtin()
            }
        }
    }

    pub fn total_coins(&self) -> i32 {
        self.total_coins.unwrap_or(self.coins.len() as i32)
    }

    /// Small playable level used when no level file is available.
    pub fn builtin() -> Self {
        Self {
            name: "Built-in".into(),
            solids: vec![
                Rect {
                    x: -200.0,
                    y: 300.0,
                    w: 2400.0,
                    h: 60.0,
                },
                Rect {
                    x: 300.0,
                    y: 230.0,
                    w: 120.0,
                    h: 16.0,
                },
                Rect {
                    x: 520.0,
                    y: 180.0,
                    w: 120.0,
                    h: 16.0,
                },
                Rect {
                    x: 760.0,
                    y: 120.0,
                    w: 160.0,
                    h: 16.0,
                },
            ],
            coins: vec![
                Point::new(200.0, 280.0),
                Point::new(360.0, 210.0),
                Point::new(580.0, 160.0),
                Point::new(840.0, 100.0),
                Point::new(1100.0, 280.0),
            ],
            power_ups: vec![
                PowerUpData {
                    kind: PickableKind::DoubleJumpPowerUp,
                    value: 8.0,
                    respawn_time: DEFAULT_RESPAWN_TIME,
                    area_min: Point::new(150.0, 200.0),
                    area_max: Point::new(450.0, 270.0),
                },
                PowerUpData {
                    kind: PickableKind::HealthPowerUp,
                    value: 2.0,
                    respawn_time: DEFAULT_RESPAWN_TIME,
                    area_min: Point::new(600.0, 220.0),
                    area_max: Point::new(1000.0, 270.0),
                },
                PowerUpData {
                    kind: PickableKind::InvincibilityPowerUp,
                    value: 5.0,
                    respawn_time: DEFAULT_RESPAWN_TIME,
                    area_min: Point::new(1000.0, 200.0),
                    area_max: Point::new(1400.0, 270.0),
                },
            ],
            enemies: vec![EnemyData {
                x: 700.0,
                y: 240.0,
                speed: None,
            }],
            spawners: vec![SpawnerData {
                x: 1200.0,
                y: 160.0,
                ..Default::default()
            }],
            parallax: vec![ParallaxData::default()],
            total_enemies: 6,
            ..Default::default()
        }
    }
}

/// The level the game scene is built from.
#[derive(Resource, Debug, Clone)]
pub struct CurrentLevel(pub LevelData);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let level = LevelData::from_json(r#"{ "name": "Tiny", "coins": [{"x": 1, "y": 2}] }"#)
            .unwrap();
        assert_eq!(level.name, "Tiny");
        assert_eq!(level.total_coins(), 1);
        assert_eq!(level.music, "game");
        assert!(level.spawners.is_empty());
    }

    #[test]
    fn explicit_total_coins_wins() {
        let level = LevelData::from_json(r#"{ "coins": [], "total_coins": 4 }"#).unwrap();
        assert_eq!(level.total_coins(), 4);
    }

    #[test]
    fn power_up_kinds_parse() {
        let level = LevelData::from_json(
            r#"{ "power_ups": [ { "kind": "InvincibilityPowerUp", "value": 3,
                 "area_min": {"x": 0, "y": 0}, "area_max": {"x": 10, "y": 10} } ] }"#,
        )
        .unwrap();
        assert_eq!(level.power_ups[0].kind, PickableKind::InvincibilityPowerUp);
        assert_eq!(level.power_ups[0].respawn_time, DEFAULT_RESPAWN_TIME);
    }

    #[test]
    fn missing_file_falls_back() {
        let level = LevelData::load_or_builtin("./no/such/level.json");
        assert_eq!(level.name, "Built-in");
        assert!(level.total_coins() > 0);
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let path = std::env::temp_dir().join("skyhop_bad_level.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            LevelData::load(&path),
            Err(GameError::LevelParse { .. })
        ));
        let _ = std::fs::remove_file(path);
    }
}
