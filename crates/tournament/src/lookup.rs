//! Where the simulator gets ratings from

use rating_core::{BlendedView, SurfaceView, DEFAULT_ELO};
use std::collections::HashMap;

/// Read-only source of a player's rating for one tournament
pub trait RatingLookup {
    fn rating(&self, player: &str) -> f64;
}

impl<F> RatingLookup for F
where
    F: Fn(&str) -> f64,
{
    fn rating(&self, player: &str) -> f64 {
        self(player)
    }
}

/// Players missing from the map are rated at the default baseline
impl RatingLookup for HashMap<String, f64> {
    fn rating(&self, player: &str) -> f64 {
        self.get(player).copied().unwrap_or(DEFAULT_ELO)
    }
}

impl RatingLookup for SurfaceView<'_> {
    fn rating(&self, player: &str) -> f64 {
        SurfaceView::rating(self, player)
    }
}

impl RatingLookup for BlendedView<'_> {
    fn rating(&self, player: &str) -> f64 {
        BlendedView::rating(self, player)
    }
}
