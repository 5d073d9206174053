//! Host settings, loaded from a TOML file and overridable from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use depthstrike_core::color::{ColorParseError, ShipColor};
use depthstrike_core::commands::PlayerCommand;
use depthstrike_core::enums::VisualMode;
use depthstrike_sim::engine::SimConfig;

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid ship color: {0}")]
    InvalidColor(#[from] ColorParseError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Start-screen ship color.
    pub ship_color: ShipColor,
    /// Start-screen visual mode.
    pub visual_mode: VisualMode,
    /// RNG seed for enemy spawns.
    pub seed: u64,
    /// Where the high score is kept.
    pub high_score_path: PathBuf,
    /// Stop a headless session after this many ticks. 0 runs until game over.
    pub max_ticks: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ship_color: ShipColor::default(),
            visual_mode: VisualMode::default(),
            seed: 42,
            high_score_path: PathBuf::from("depthstrike-highscore.json"),
            max_ticks: 0,
        }
    }
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        toml::from_str(contents).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| SettingsError::Serialize(e.to_string()))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Set the ship color from a `#rrggbb` string.
    pub fn set_ship_color(&mut self, color: &str) -> Result<(), SettingsError> {
        self.ship_color = color.parse()?;
        Ok(())
    }

    /// Engine configuration for a run starting from `high_score`.
    pub fn sim_config(&self, high_score: u32) -> SimConfig {
        SimConfig {
            seed: self.seed,
            high_score,
            ..Default::default()
        }
    }

    /// Commands that apply the start-screen choices.
    pub fn start_screen_commands(&self) -> [PlayerCommand; 2] {
        [
            PlayerCommand::SetShipColor {
                color: self.ship_color,
            },
            PlayerCommand::SetVisualMode {
                mode: self.visual_mode,
            },
        ]
    }

    /// Tick cap for headless runs, if any.
    pub fn tick_limit(&self) -> Option<u64> {
        (self.max_ticks > 0).then_some(self.max_ticks)
    }
}
