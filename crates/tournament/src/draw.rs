//! Draw construction

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InvalidDrawError;
use crate::lookup::RatingLookup;

/// Default bracket size (a Grand Slam main draw)
pub const DEFAULT_DRAW_SIZE: usize = 128;

/// One position in a draw
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawSlot {
    Player(String),
    Bye,
}

impl DrawSlot {
    pub fn player(&self) -> Option<&str> {
        match self {
            Self::Player(id) => Some(id),
            Self::Bye => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye)
    }
}

impl fmt::Display for DrawSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => write!(f, "{}", id),
            Self::Bye => write!(f, "bye"),
        }
    }
}

/// Lay `entrants` into a draw of `draw_size` slots.
///
/// Entrants past `draw_size` are dropped. When the field is short, the last
/// entrants are each paired with a bye so every bye has a real opponent:
/// `[P1, P2, P3]` in a draw of 4 becomes `[P1, P2, P3, bye]`. A field smaller
/// than half the draw would need bye-vs-bye pairings and is rejected.
pub fn build_draw(entrants: &[String], draw_size: usize) -> Result<Vec<DrawSlot>, InvalidDrawError> {
    if entrants.is_empty() {
        return Err(InvalidDrawError::EmptyEntrants);
    }
    if !draw_size.is_power_of_two() {
        return Err(InvalidDrawError::DrawSizeNotPowerOfTwo(draw_size));
    }
    if draw_size == 1 {
        return Ok(vec![DrawSlot::Player(entrants[0].clone())]);
    }

    let field = entrants.len().min(draw_size);
    let byes = draw_size - field;
    if byes > draw_size / 2 {
        return Err(InvalidDrawError::TooFewEntrants {
            entrants: field,
            draw_size,
        });
    }

    let full_pairs = draw_size / 2 - byes;
    let mut players = entrants[..field].iter().cloned().map(DrawSlot::Player);
    let mut draw: Vec<DrawSlot> = players.by_ref().take(full_pairs * 2).collect();
    for player in players {
        draw.push(player);
        draw.push(DrawSlot::Bye);
    }
    Ok(draw)
}

/// Shuffle `entrants` with `rng`, then lay them into a draw
pub fn build_random_draw<R: Rng + ?Sized>(
    entrants: &[String],
    draw_size: usize,
    rng: &mut R,
) -> Result<Vec<DrawSlot>, InvalidDrawError> {
    let mut shuffled = entrants.to_vec();
    shuffled.shuffle(rng);
    build_draw(&shuffled, draw_size)
}

/// Order entrants by rating, highest first. Equal ratings keep their
/// supplied order.
pub fn seed_by_rating<L: RatingLookup + ?Sized>(entrants: &[String], lookup: &L) -> Vec<String> {
    let mut rated: Vec<(f64, &String)> = entrants
        .iter()
        .map(|player| (lookup.rating(player), player))
        .collect();
    rated.sort_by(|a, b| b.0.total_cmp(&a.0));
    rated.into_iter().map(|(_, player)| player.clone()).collect()
}

#[cfg(test)]
#[path = "draw_tests.rs"]
mod draw_tests;
