//! Rating engine configuration

use serde::{Deserialize, Serialize};

/// Default starting Elo for players with no history on a surface
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile).
///
/// Older drivers used 24 in one place and 32 in another; 32 is the single
/// canonical default and every caller goes through [`EloConfig::k_factor`].
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// What the engine does with a record that lacks a winner or loser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDataPolicy {
    /// Stop processing and return the error
    #[default]
    Abort,
    /// Log the record and continue with the next one
    Skip,
}

/// Elo configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EloConfig {
    /// Rating assigned the first time a player appears on a surface
    pub baseline_rating: f64,
    /// Maximum rating swing of a single match
    pub k_factor: f64,
    pub missing_data: MissingDataPolicy,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            baseline_rating: DEFAULT_ELO,
            k_factor: DEFAULT_K_FACTOR,
            missing_data: MissingDataPolicy::Abort,
        }
    }
}

impl EloConfig {
    pub fn new(baseline_rating: f64, k_factor: f64) -> Self {
        Self {
            baseline_rating,
            k_factor,
            ..Default::default()
        }
    }

    /// Same config with a different missing-data policy
    pub fn with_missing_data(mut self, policy: MissingDataPolicy) -> Self {
        self.missing_data = policy;
        self
    }
}
