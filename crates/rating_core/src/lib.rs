//! Surface-aware Elo ratings for season projection
//!
//! This crate replays a chronological match history and produces:
//! - A per-surface rating table (read-only once built)
//! - The pre-match ratings of every processed record, for auditing
//! - Blended ratings for surface-agnostic consumers
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use rating_core::{EloConfig, MatchRecord, RatingEngine};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let history = vec![MatchRecord::new(date, Some("Hard"), "Alcaraz", "Ruud")];
//!
//! let processed = RatingEngine::new(EloConfig::default()).process(&history).unwrap();
//! assert!(processed.table.get("Alcaraz", "Hard") > 1500.0);
//! ```

mod config;
mod engine;
mod error;
mod record;
mod table;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use record::*;
pub use table::*;
