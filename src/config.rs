//! JSON-backed configuration
//!
//! `Tuning` holds the physics and sizing constants, `LevelDefinition` one
//! stage (layout rows plus its ordered parameter list), and `GameConfig`
//! bundles both for the application. Every struct falls back to defaults
//! for missing fields, so a config file only needs to list what it changes.

use crate::error::ConfigError;
use crate::levels;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Physics and sizing constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Edge length of one layout cell in pixels
    pub cell_size: u32,
    pub player_width: u32,
    pub player_height: u32,
    /// Horizontal pixels per frame while a direction is held
    pub player_speed: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_speed: f32,
    /// Maximum downward velocity
    pub terminal_velocity: f32,
    pub item_width: u32,
    pub item_height: u32,
    /// Length of an enemy's sight rectangle in front of it
    pub enemy_sight_range: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            cell_size: 64,
            player_width: 32,
            player_height: 64,
            player_speed: 8.0,
            gravity: 0.8,
            jump_speed: -16.0,
            terminal_velocity: 20.0,
            item_width: 64,
            item_height: 32,
            enemy_sight_range: 256,
        }
    }
}

impl Tuning {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// One stage: a layout and the parameters its cells consume in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub rows: Vec<String>,
    #[serde(default)]
    pub params: Vec<Vec<i32>>,
}

impl LevelDefinition {
    pub fn new(name: impl Into<String>, rows: &[&str], params: &[&[i32]]) -> Self {
        LevelDefinition {
            name: name.into(),
            rows: rows.iter().map(|row| row.to_string()).collect(),
            params: params.iter().map(|entry| entry.to_vec()).collect(),
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Everything the application needs to start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tuning: Tuning,
    pub stages: Vec<LevelDefinition>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            tuning: Tuning::default(),
            stages: levels::bundled(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Pixel size that fits the widest and the tallest stage.
    pub fn world_size(&self) -> (u32, u32) {
        let columns = self
            .stages
            .iter()
            .flat_map(|stage| stage.rows.iter().map(|row| row.chars().count()))
            .max()
            .unwrap_or(0);
        let rows = self.stages.iter().map(|stage| stage.rows.len()).max().unwrap_or(0);
        (
            columns as u32 * self.tuning.cell_size,
            rows as u32 * self.tuning.cell_size,
        )
    }
}
