//! Simulation and season configuration

use rating_core::EloConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::draw::DEFAULT_DRAW_SIZE;
use crate::error::{ConfigError, InvalidDrawError};
use crate::probability::WinModel;

/// Default number of Monte Carlo trials per tournament
pub const DEFAULT_TRIALS: u64 = 5000;

/// Trials per parallel batch
pub const DEFAULT_BATCH_SIZE: u64 = 500;

/// Bracket simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Slots in the draw; must be a power of two
    pub draw_size: usize,
    /// Monte Carlo trials per tournament
    pub trials: u64,
    /// Seed for the trial generator (None = seeded from entropy)
    pub rng_seed: Option<u64>,
    pub win_model: WinModel,
    /// Trials handed to each worker
    pub batch_size: u64,
    /// Run batches on the rayon pool
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            draw_size: DEFAULT_DRAW_SIZE,
            trials: DEFAULT_TRIALS,
            rng_seed: None,
            win_model: WinModel::Logistic,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: true,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), InvalidDrawError> {
        if !self.draw_size.is_power_of_two() {
            return Err(InvalidDrawError::DrawSizeNotPowerOfTwo(self.draw_size));
        }
        if self.trials == 0 {
            return Err(InvalidDrawError::ZeroTrials);
        }
        if self.batch_size == 0 {
            return Err(InvalidDrawError::ZeroBatchSize);
        }
        Ok(())
    }
}

/// A tournament to simulate within a season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentSpec {
    pub name: String,
    /// Surface ratings to use (None = blended ratings)
    #[serde(default)]
    pub surface: Option<String>,
    /// Explicit field (None = the highest-rated players that fit the draw)
    #[serde(default)]
    pub entrants: Option<Vec<String>>,
}

/// Full season configuration, usually read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    pub elo: EloConfig,
    pub simulation: SimulationConfig,
    #[serde(rename = "tournament")]
    pub tournaments: Vec<TournamentSpec>,
}

impl SeasonConfig {
    /// Load a season config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.simulation.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
