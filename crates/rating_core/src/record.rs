//! Match records fed to the rating engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MissingDataError, MissingField};

/// Surface bucket used when a record carries no surface
pub const UNKNOWN_SURFACE: &str = "Unknown";

/// Outcome of a single match, as supplied by the data loader.
///
/// Records are immutable once built. Participants are optional so that an
/// incomplete row can still be represented and rejected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    date: NaiveDate,
    #[serde(default)]
    surface: Option<String>,
    #[serde(default)]
    winner: Option<String>,
    #[serde(default)]
    loser: Option<String>,
}

impl MatchRecord {
    pub fn new(date: NaiveDate, surface: Option<&str>, winner: &str, loser: &str) -> Self {
        Self {
            date,
            surface: surface.map(str::to_string),
            winner: Some(winner.to_string()),
            loser: Some(loser.to_string()),
        }
    }

    /// Build a record whose participants may be missing
    pub fn partial(
        date: NaiveDate,
        surface: Option<&str>,
        winner: Option<&str>,
        loser: Option<&str>,
    ) -> Self {
        Self {
            date,
            surface: surface.map(str::to_string),
            winner: winner.map(str::to_string),
            loser: loser.map(str::to_string),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Surface bucket, `"Unknown"` when absent or blank
    pub fn surface(&self) -> &str {
        match self.surface.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => UNKNOWN_SURFACE,
        }
    }

    pub fn winner(&self) -> Option<&str> {
        non_blank(self.winner.as_deref())
    }

    pub fn loser(&self) -> Option<&str> {
        non_blank(self.loser.as_deref())
    }

    /// Both participants, or the first missing one.
    ///
    /// `index` is the record's position in its history and is only used for
    /// the error.
    pub fn participants(&self, index: usize) -> Result<(&str, &str), MissingDataError> {
        let winner = self.winner().ok_or(MissingDataError {
            index,
            field: MissingField::Winner,
        })?;
        let loser = self.loser().ok_or(MissingDataError {
            index,
            field: MissingField::Loser,
        })?;
        Ok((winner, loser))
    }
}

fn non_blank(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|s| !s.is_empty())
}

/// Stable sort by date, keeping same-day records in their supplied order
pub fn sort_chronologically(history: &mut [MatchRecord]) {
    history.sort_by_key(MatchRecord::date);
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
