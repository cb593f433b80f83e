//! Per-surface rating storage

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Rating of one player on one surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRating {
    pub rating: f64,
    /// Matches this player has been rated in on the surface
    pub matches: u32,
}

/// Ratings keyed by surface, then by player.
///
/// Absent entries read as the table's baseline. Only the rating engine can
/// write to a table; everyone else gets it by shared reference once replay
/// has finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingTable {
    baseline: f64,
    surfaces: BTreeMap<String, BTreeMap<String, SurfaceRating>>,
}

impl RatingTable {
    pub fn new(baseline: f64) -> Self {
        Self {
            baseline,
            surfaces: BTreeMap::new(),
        }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Rating of `player` on `surface`, or the baseline if they never played there
    pub fn get(&self, player: &str, surface: &str) -> f64 {
        self.surfaces
            .get(surface)
            .and_then(|players| players.get(player))
            .map_or(self.baseline, |entry| entry.rating)
    }

    /// Get or initialize the entry for a player on a surface
    pub(crate) fn entry(&mut self, player: &str, surface: &str) -> &mut SurfaceRating {
        let baseline = self.baseline;
        self.surfaces
            .entry(surface.to_string())
            .or_default()
            .entry(player.to_string())
            .or_insert(SurfaceRating {
                rating: baseline,
                matches: 0,
            })
    }

    pub fn contains(&self, player: &str, surface: &str) -> bool {
        self.surfaces
            .get(surface)
            .is_some_and(|players| players.contains_key(player))
    }

    pub fn matches_played(&self, player: &str, surface: &str) -> u32 {
        self.surfaces
            .get(surface)
            .and_then(|players| players.get(player))
            .map_or(0, |entry| entry.matches)
    }

    /// Surfaces with at least one rated match, sorted
    pub fn surfaces(&self) -> Vec<&str> {
        self.surfaces.keys().map(String::as_str).collect()
    }

    /// Every player rated on any surface, sorted
    pub fn players(&self) -> Vec<&str> {
        self.surfaces
            .values()
            .flat_map(|players| players.keys().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Mean of the player's ratings across every surface in the table.
    ///
    /// A surface the player never played counts as the baseline, so the value
    /// is defined for any player, including ones the table has never seen.
    pub fn blended(&self, player: &str) -> f64 {
        if self.surfaces.is_empty() {
            return self.baseline;
        }
        let total: f64 = self
            .surfaces
            .keys()
            .map(|surface| self.get(player, surface))
            .sum();
        total / self.surfaces.len() as f64
    }

    /// Players sorted by rating, highest first.
    ///
    /// With a surface, only players rated on it are listed; without one,
    /// every player is listed with their blended rating. Ties are ordered by
    /// player id.
    pub fn leaderboard(&self, surface: Option<&str>) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = match surface {
            Some(surface) => self
                .surfaces
                .get(surface)
                .map(|players| {
                    players
                        .iter()
                        .map(|(name, entry)| (name.clone(), entry.rating))
                        .collect()
                })
                .unwrap_or_default(),
            None => self
                .players()
                .into_iter()
                .map(|name| (name.to_string(), self.blended(name)))
                .collect(),
        };
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Read-only view of one surface's ratings
    pub fn surface_view<'a>(&'a self, surface: &'a str) -> SurfaceView<'a> {
        SurfaceView {
            table: self,
            surface,
        }
    }

    /// Read-only view of blended ratings
    pub fn blended_view(&self) -> BlendedView<'_> {
        BlendedView { table: self }
    }
}

/// Ratings on a single surface, borrowed from a [`RatingTable`]
#[derive(Debug, Clone, Copy)]
pub struct SurfaceView<'a> {
    table: &'a RatingTable,
    surface: &'a str,
}

impl SurfaceView<'_> {
    pub fn surface(&self) -> &str {
        self.surface
    }

    pub fn rating(&self, player: &str) -> f64 {
        self.table.get(player, self.surface)
    }
}

/// Blended ratings, borrowed from a [`RatingTable`]
#[derive(Debug, Clone, Copy)]
pub struct BlendedView<'a> {
    table: &'a RatingTable,
}

impl BlendedView<'_> {
    pub fn rating(&self, player: &str) -> f64 {
        self.table.blended(player)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
