//! Game configuration, loaded from JSON and validated before a game is built.
//!
//! Every field has a default matching the jam template, so a config file only
//! needs to list what it changes.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use glam::Vec2;

use crate::animation::DEFAULT_FRAME_DURATION;
use crate::entity::EntityKind;
use crate::movement::{
    MovementTuning, DEFAULT_POINTER_MIN_DISTANCE, DEFAULT_TIME_TO_FULL_SPEED_MS,
};
use crate::sprite;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Margin {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub kind: EntityKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    #[serde(default = "default_map")]
    pub map: Size,
    #[serde(default = "default_viewport")]
    pub viewport: Size,
    #[serde(default = "default_camera_margin")]
    pub camera_margin: Margin,
    #[serde(default = "default_round_duration")]
    pub round_duration_secs: f32,
    #[serde(default = "default_time_to_full_speed")]
    pub time_to_full_speed_ms: f64,
    #[serde(default = "default_pointer_min_distance")]
    pub pointer_min_distance: f32,
    #[serde(default = "default_frame_duration")]
    pub frame_duration_secs: f32,
    #[serde(default = "default_hero_start")]
    pub hero_start: Vec2Json,
    #[serde(default = "default_foes")]
    pub foes: Vec<Spawn>,
}

/// `[x, y]` pair as written in config files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Vec2Json(pub f32, pub f32);

impl From<Vec2Json> for Vec2 {
    fn from(value: Vec2Json) -> Self {
        Vec2::new(value.0, value.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map: default_map(),
            viewport: default_viewport(),
            camera_margin: default_camera_margin(),
            round_duration_secs: default_round_duration(),
            time_to_full_speed_ms: default_time_to_full_speed(),
            pointer_min_distance: default_pointer_min_distance(),
            frame_duration_secs: default_frame_duration(),
            hero_start: default_hero_start(),
            foes: default_foes(),
        }
    }
}

impl GameConfig {
    pub fn movement_tuning(&self) -> MovementTuning {
        MovementTuning {
            time_to_full_speed_ms: self.time_to_full_speed_ms,
            pointer_min_distance: self.pointer_min_distance,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, size) in [("map", self.map), ("viewport", self.viewport)] {
            if !(size.width > 0.0 && size.height > 0.0) {
                return Err(format!(
                    "Config validation failed: {name} size must be > 0 (got {}x{})",
                    size.width, size.height
                ));
            }
        }
        if self.viewport.width > self.map.width || self.viewport.height > self.map.height {
            return Err(format!(
                "Config validation failed: viewport {}x{} is larger than map {}x{}",
                self.viewport.width, self.viewport.height, self.map.width, self.map.height
            ));
        }
        let margin = self.camera_margin;
        if margin.x < 0.0
            || margin.y < 0.0
            || 2.0 * margin.x >= self.viewport.width
            || 2.0 * margin.y >= self.viewport.height
        {
            return Err(format!(
                "Config validation failed: camera margin ({}, {}) leaves no camera window",
                margin.x, margin.y
            ));
        }
        if !(self.round_duration_secs > 0.0) {
            return Err("Config validation failed: round_duration_secs must be > 0".to_string());
        }
        if !(self.time_to_full_speed_ms > 0.0) {
            return Err("Config validation failed: time_to_full_speed_ms must be > 0".to_string());
        }
        if !(self.pointer_min_distance > 0.0) {
            return Err("Config validation failed: pointer_min_distance must be > 0".to_string());
        }
        if !(self.frame_duration_secs > 0.0) {
            return Err("Config validation failed: frame_duration_secs must be > 0".to_string());
        }

        let hero = Spawn {
            kind: EntityKind::Hero,
            x: self.hero_start.0,
            y: self.hero_start.1,
        };
        for spawn in std::iter::once(&hero).chain(&self.foes) {
            self.validate_spawn(spawn)?;
        }
        if let Some(spawn) = self.foes.iter().find(|s| s.kind == EntityKind::Hero) {
            return Err(format!(
                "Config validation failed: foe list contains a hero at ({}, {})",
                spawn.x, spawn.y
            ));
        }
        Ok(())
    }

    fn validate_spawn(&self, spawn: &Spawn) -> Result<(), String> {
        let (w, h) = sprite::sheet(spawn.kind)
            .move_frames
            .first()
            .map_or((0.0, 0.0), |frame| (frame.w as f32, frame.h as f32));
        if spawn.x < 0.0
            || spawn.y < 0.0
            || spawn.x + w > self.map.width
            || spawn.y + h > self.map.height
        {
            return Err(format!(
                "Config validation failed: {} spawn at ({}, {}) is outside the map",
                spawn.kind, spawn.x, spawn.y
            ));
        }
        Ok(())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<GameConfig, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    config.validate()?;
    Ok(config)
}

const fn default_map() -> Size {
    Size {
        width: 640.0,
        height: 480.0,
    }
}

const fn default_viewport() -> Size {
    Size {
        width: 320.0,
        height: 240.0,
    }
}

const fn default_camera_margin() -> Margin {
    Margin { x: 100.0, y: 50.0 }
}

const fn default_round_duration() -> f32 {
    60.0
}

const fn default_time_to_full_speed() -> f64 {
    DEFAULT_TIME_TO_FULL_SPEED_MS
}

const fn default_pointer_min_distance() -> f32 {
    DEFAULT_POINTER_MIN_DISTANCE
}

const fn default_frame_duration() -> f32 {
    DEFAULT_FRAME_DURATION
}

const fn default_hero_start() -> Vec2Json {
    Vec2Json(160.0, 120.0)
}

fn default_foes() -> Vec<Spawn> {
    const FOE_SPAWNS: [(f32, f32); 11] = [
        (10.0, 10.0),
        (614.0, 10.0),
        (614.0, 452.0),
        (300.0, 200.0),
        (400.0, 300.0),
        (500.0, 400.0),
        (10.0, 452.0),
        (100.0, 100.0),
        (100.0, 118.0),
        (116.0, 118.0),
        (116.0, 100.0),
    ];
    FOE_SPAWNS
        .iter()
        .map(|&(x, y)| Spawn {
            kind: EntityKind::Foe,
            x,
            y,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "jam_config_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.foes.len(), 11);
        assert_eq!(config.round_duration_secs, 60.0);
    }

    #[test]
    fn empty_json_object_yields_defaults() {
        let config: GameConfig = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/config/game.json");
        let config = load_config_from_path(&path).expect("shipped config should load");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn load_config_overrides_fields() {
        let path = temp_file_path("valid");
        fs::write(
            &path,
            r#"{
              "round_duration_secs": 30,
              "hero_start": [20, 30],
              "foes": [{ "kind": "foe", "x": 50, "y": 60 }]
            }"#,
        )
        .expect("write temp file");

        let config = load_config_from_path(&path).expect("valid config should load");
        assert_eq!(config.round_duration_secs, 30.0);
        assert_eq!(Vec2::from(config.hero_start), Vec2::new(20.0, 30.0));
        assert_eq!(config.foes.len(), 1);
        assert_eq!(config.map, default_map());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_config_rejects_unknown_entity_kind() {
        let path = temp_file_path("unknown_kind");
        fs::write(&path, r#"{ "foes": [{ "kind": "dragon", "x": 0, "y": 0 }] }"#)
            .expect("write temp file");
        let err = load_config_from_path(&path).expect_err("unknown kind should fail");
        assert!(err.contains("Failed to parse config JSON"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let path = temp_file_path("missing");
        let err = load_config_from_path(&path).expect_err("missing file should fail");
        assert!(err.contains("Failed to read"));
    }

    #[test]
    fn viewport_larger_than_map_is_rejected() {
        let config = GameConfig {
            viewport: Size {
                width: 800.0,
                height: 240.0,
            },
            ..GameConfig::default()
        };
        let err = config.validate().expect_err("viewport too large");
        assert!(err.contains("larger than map"));
    }

    #[test]
    fn margins_must_leave_a_window() {
        let config = GameConfig {
            camera_margin: Margin { x: 160.0, y: 50.0 },
            ..GameConfig::default()
        };
        let err = config.validate().expect_err("window collapsed");
        assert!(err.contains("leaves no camera window"));
    }

    #[test]
    fn spawn_outside_map_is_rejected() {
        let config = GameConfig {
            foes: vec![Spawn {
                kind: EntityKind::Foe,
                x: 630.0,
                y: 10.0,
            }],
            ..GameConfig::default()
        };
        let err = config.validate().expect_err("foe sticks out of the map");
        assert!(err.contains("outside the map"));
    }

    #[test]
    fn hero_in_foe_list_is_rejected() {
        let config = GameConfig {
            foes: vec![Spawn {
                kind: EntityKind::Hero,
                x: 10.0,
                y: 10.0,
            }],
            ..GameConfig::default()
        };
        let err = config.validate().expect_err("second hero");
        assert!(err.contains("contains a hero"));
    }

    #[test]
    fn non_positive_durations_are_rejected() {
        let config = GameConfig {
            round_duration_secs: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            time_to_full_speed_ms: -1.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
