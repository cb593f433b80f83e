//! Simulation results and reporting

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Champion counts over a batch of simulated tournaments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    counts: BTreeMap<String, u64>,
    trials: u64,
}

impl SimulationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed trial
    pub(crate) fn record_champion(&mut self, player: &str) {
        *self.counts.entry(player.to_string()).or_insert(0) += 1;
        self.trials += 1;
    }

    /// Fold another batch's counts into this one
    pub(crate) fn merge(&mut self, other: SimulationResult) {
        for (player, wins) in other.counts {
            *self.counts.entry(player).or_insert(0) += wins;
        }
        self.trials += other.trials;
    }

    /// Titles per player. Players who never won are absent.
    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn wins(&self, player: &str) -> u64 {
        self.counts.get(player).copied().unwrap_or(0)
    }

    /// Share of trials won by `player`
    pub fn probability(&self, player: &str) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.wins(player) as f64 / self.trials as f64
    }

    /// The `n` most frequent champions, most titles first, ties by id
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(player, &wins)| (player.as_str(), wins))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    /// Every champion with their title probability, ordered like [`top`](Self::top)
    pub fn champion_distribution(&self) -> Vec<(&str, f64)> {
        self.top(self.counts.len())
            .into_iter()
            .map(|(player, wins)| (player, wins as f64 / self.trials as f64))
            .collect()
    }

    /// Generate a text report of the leading champions
    pub fn generate_report(&self, name: &str, n: usize) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n", name));
        report.push_str(&format!("Trials: {}\n\n", self.trials));
        report.push_str(&format!("{:<30} {:>8} {:>8}\n", "Player", "Titles", "Win %"));
        report.push_str(&"-".repeat(48));
        report.push('\n');

        for (player, wins) in self.top(n) {
            report.push_str(&format!(
                "{:<30} {:>8} {:>7.2}%\n",
                player,
                wins,
                self.probability(player) * 100.0
            ));
        }

        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
