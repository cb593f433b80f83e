//! Elo replay over a match history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{EloConfig, MissingDataPolicy};
use crate::error::MissingDataError;
use crate::record::MatchRecord;
use crate::table::RatingTable;

/// Expected score for a player rated `rating` against `opponent`
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / 400.0))
}

/// Ratings of both participants just before a record was applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreMatchElo {
    /// Position of the record in the supplied history
    pub index: usize,
    pub winner_pre: f64,
    pub loser_pre: f64,
}

/// Output of a full replay
#[derive(Debug, Clone)]
pub struct ProcessedHistory {
    /// Final ratings
    pub table: RatingTable,
    /// One entry per applied record, in history order
    pub pre_match: Vec<PreMatchElo>,
}

/// Replays match histories into rating tables
#[derive(Debug, Clone, Default)]
pub struct RatingEngine {
    config: EloConfig,
}

impl RatingEngine {
    pub fn new(config: EloConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EloConfig {
        &self.config
    }

    /// Fold `history` into a fresh rating table.
    ///
    /// Records must already be in non-decreasing date order. The engine does
    /// not reorder them: a date that goes backwards is logged and the record
    /// is applied where it stands.
    pub fn process(&self, history: &[MatchRecord]) -> Result<ProcessedHistory, MissingDataError> {
        let mut table = RatingTable::new(self.config.baseline_rating);
        let mut pre_match = Vec::with_capacity(history.len());
        let mut last_date: Option<NaiveDate> = None;
        let mut skipped = 0usize;

        for (index, record) in history.iter().enumerate() {
            if let Some(prev) = last_date {
                if record.date() < prev {
                    warn!(index, date = %record.date(), previous = %prev, "match history is not in date order");
                }
            }
            last_date = Some(record.date());

            let (winner, loser) = match record.participants(index) {
                Ok(pair) => pair,
                Err(err) => match self.config.missing_data {
                    MissingDataPolicy::Abort => return Err(err),
                    MissingDataPolicy::Skip => {
                        warn!(%err, "skipping match record");
                        skipped += 1;
                        continue;
                    }
                },
            };

            let (winner_pre, loser_pre) = self.apply(&mut table, record.surface(), winner, loser);
            pre_match.push(PreMatchElo {
                index,
                winner_pre,
                loser_pre,
            });
        }

        debug!(
            applied = pre_match.len(),
            skipped,
            surfaces = table.surfaces().len(),
            "replayed match history"
        );

        Ok(ProcessedHistory { table, pre_match })
    }

    /// Apply one result, returning the pre-match ratings.
    ///
    /// The same delta is added to the winner and removed from the loser.
    fn apply(&self, table: &mut RatingTable, surface: &str, winner: &str, loser: &str) -> (f64, f64) {
        let winner_pre = table.entry(winner, surface).rating;
        let loser_pre = table.entry(loser, surface).rating;

        let delta = self.config.k_factor * (1.0 - expected_score(winner_pre, loser_pre));

        let w = table.entry(winner, surface);
        w.rating += delta;
        w.matches += 1;

        let l = table.entry(loser, surface);
        l.rating -= delta;
        l.matches += 1;

        (winner_pre, loser_pre)
    }
}

/// Replay `history` with the given baseline and K-factor, aborting on
/// incomplete records
pub fn process(
    history: &[MatchRecord],
    baseline: f64,
    k_factor: f64,
) -> Result<(RatingTable, Vec<PreMatchElo>), MissingDataError> {
    let processed = RatingEngine::new(EloConfig::new(baseline, k_factor)).process(history)?;
    Ok((processed.table, processed.pre_match))
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
