//! Property tests for the Elo replay
//!
//! - Every applied match is zero-sum between its two participants
//! - Equal ratings give exactly 0.5
//! - Expected score is strictly increasing in the player's own rating

use chrono::NaiveDate;
use proptest::prelude::*;
use rating_core::{expected_score, EloConfig, MatchRecord, RatingEngine};

const PLAYERS: [&str; 5] = ["Alcaraz", "Ruud", "Dimitrov", "Rune", "Zverev"];
const SURFACES: [&str; 3] = ["Hard", "Clay", "Grass"];

fn history_strategy() -> impl Strategy<Value = Vec<MatchRecord>> {
    prop::collection::vec((0..5usize, 0..5usize, 0..3usize), 1..60).prop_map(|rows| {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        rows.into_iter()
            .enumerate()
            .filter(|(_, (w, l, _))| w != l)
            .map(|(i, (w, l, s))| {
                let date = start + chrono::Days::new(i as u64);
                MatchRecord::new(date, Some(SURFACES[s]), PLAYERS[w], PLAYERS[l])
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_each_update_is_zero_sum(history in history_strategy(), k in 1.0f64..64.0) {
        let engine = RatingEngine::new(EloConfig::new(1500.0, k));

        // Replaying one record at a time exposes each step's before/after
        for n in 1..=history.len() {
            let before = engine.process(&history[..n - 1]).unwrap().table;
            let after = engine.process(&history[..n]).unwrap().table;
            let record = &history[n - 1];
            let surface = record.surface();
            let winner = record.winner().unwrap();
            let loser = record.loser().unwrap();

            let dw = after.get(winner, surface) - before.get(winner, surface);
            let dl = after.get(loser, surface) - before.get(loser, surface);
            prop_assert!((dw + dl).abs() < 1e-9, "dw={} dl={}", dw, dl);
            prop_assert!(dw > 0.0);
        }
    }

    #[test]
    fn prop_surface_mass_is_conserved(history in history_strategy()) {
        let table = RatingEngine::default().process(&history).unwrap().table;
        for surface in table.surfaces() {
            let rated: Vec<_> = table
                .players()
                .into_iter()
                .filter(|p| table.contains(p, surface))
                .collect();
            let mass: f64 = rated.iter().map(|p| table.get(p, surface) - 1500.0).sum();
            prop_assert!(mass.abs() < 1e-6);
        }
    }

    #[test]
    fn prop_parity_is_half(r in -5000.0f64..5000.0) {
        prop_assert_eq!(expected_score(r, r), 0.5);
    }

    #[test]
    fn prop_expected_score_monotonic(r in 500.0f64..2500.0, opp in 500.0f64..2500.0, bump in 1.0f64..400.0) {
        prop_assert!(expected_score(r + bump, opp) > expected_score(r, opp));
    }
}
