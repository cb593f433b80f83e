//! Tournament simulation for season projection
//!
//! This crate provides infrastructure for:
//! - Building single-elimination draws (with byes for short fields)
//! - Running Monte Carlo trials over a draw, sequentially or on rayon
//! - Reporting title probabilities per player
//!
//! # Usage
//!
//! ```bash
//! # Replay a season and print the blended leaderboard
//! cargo run -p tournament -- ratings data/matches_2024.json --top 20
//!
//! # Simulate every tournament in a season config
//! cargo run -p tournament -- simulate data/matches_2024.json --config season.toml
//! ```

mod config;
mod draw;
mod error;
mod lookup;
mod probability;
mod results;
mod simulator;

pub use config::*;
pub use draw::*;
pub use error::*;
pub use lookup::*;
pub use probability::*;
pub use results::*;
pub use simulator::*;
