//! Simulation settings
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, SETTLE_DELAY_TICKS, SIM_HZ};
use crate::sim::{Arena, GameState};

/// Configuration problems, reported before any state is built
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("field {axis} must be finite and positive, got {value}")]
    InvalidDimension { axis: &'static str, value: f32 },
    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field width in simulation units
    pub width: f32,
    /// Field height in simulation units
    pub height: f32,
    /// RNG seed for tier rolls
    pub seed: u64,
    /// Ticks per second the host loop targets
    pub tick_hz: u32,
    /// Ticks between a launch and the next pending body
    pub settle_delay_ticks: u32,
    /// Upper bound on ticks for headless runs
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            seed: 0x5EED,
            tick_hz: SIM_HZ,
            settle_delay_ticks: SETTLE_DELAY_TICKS,
            max_ticks: 60 * 60 * 10,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the numeric contract the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidDimension { axis, value });
            }
        }
        if self.tick_hz == 0 {
            return Err(SettingsError::ZeroTickRate);
        }
        Ok(())
    }

    /// Validate and build a fresh game state
    pub fn build_state(&self) -> Result<GameState, SettingsError> {
        self.validate()?;
        let mut state = GameState::new(Arena::new(self.width, self.height), self.seed);
        state.settle_delay_ticks = self.settle_delay_ticks;
        Ok(state)
    }

    /// Seconds per tick for the host loop
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }
}
