//! Head-to-head win probability models

use rating_core::expected_score;
use serde::{Deserialize, Serialize};

/// How a pairing's ratings become a win probability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinModel {
    /// Standard Elo logistic curve: `1 / (1 + 10^((R_b - R_a) / 400))`
    #[default]
    Logistic,
    /// Legacy `R_a / (R_a + R_b)`.
    ///
    /// Only here to reproduce old season projections; it is not on the Elo
    /// scale and flattens large rating gaps.
    LinearRatio,
}

impl WinModel {
    /// Probability that the player rated `a` beats the player rated `b`
    pub fn win_probability(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Logistic => expected_score(a, b),
            Self::LinearRatio => {
                let total = a + b;
                if total > 0.0 && a >= 0.0 && b >= 0.0 {
                    a / total
                } else {
                    0.5
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_matches_elo() {
        assert_eq!(WinModel::Logistic.win_probability(1500.0, 1500.0), 0.5);
        assert!(WinModel::Logistic.win_probability(3000.0, 1500.0) > 0.9998);
    }

    #[test]
    fn test_linear_ratio() {
        let p = WinModel::LinearRatio.win_probability(3000.0, 1500.0);
        assert!((p - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(WinModel::LinearRatio.win_probability(0.0, 0.0), 0.5);
        assert_eq!(WinModel::LinearRatio.win_probability(-10.0, 20.0), 0.5);
    }
}
