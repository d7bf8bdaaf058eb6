//! Score produced by [`RiskRating::calculate`](crate::RiskRating::calculate).
//!
//! A [`Score`] holds the three sub-scores verbatim. The qualitative
//! [`Level`] for each is recomputed on every call from fixed thresholds:
//!
//! | Sub-score        | Level    |
//! |------------------|----------|
//! | `< 3`            | `LOW`    |
//! | `3 <= s < 6`     | `MEDIUM` |
//! | `>= 6`           | `HIGH`   |
//!
//! # Examples
//!
//! ```rust
//! use owasp_risk_rating::{Level, Score};
//!
//! let score = Score::new(4.875, 6.5, 1.75);
//! assert_eq!(score.likelihood(), Level::Medium);
//! assert_eq!(score.technical_impact(), Level::High);
//! assert_eq!(score.business_impact(), Level::Low);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound (inclusive) of `MEDIUM`.
pub const MEDIUM_THRESHOLD: f64 = 3.0;
/// Lower bound (inclusive) of `HIGH`.
pub const HIGH_THRESHOLD: f64 = 6.0;

/// Qualitative classification of a sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Classify a sub-score. No tolerance is applied, so `3.0` is `Medium`
    /// and `6.0` is `High`. NaN fails both comparisons and lands in `High`.
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_THRESHOLD {
            Level::Low
        } else if score < HIGH_THRESHOLD {
            Level::Medium
        } else {
            Level::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "LOW",
            Level::Medium => "MEDIUM",
            Level::High => "HIGH",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Likelihood, technical impact and business impact sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    likelihood_score: f64,
    technical_impact_score: f64,
    business_impact_score: f64,
}

impl Score {
    pub fn new(
        likelihood_score: f64,
        technical_impact_score: f64,
        business_impact_score: f64,
    ) -> Self {
        Self {
            likelihood_score,
            technical_impact_score,
            business_impact_score,
        }
    }

    /// Mean weight of the eight threat agent and vulnerability factors.
    pub fn likelihood_score(&self) -> f64 {
        self.likelihood_score
    }

    /// Mean weight of the four technical impact factors.
    pub fn technical_impact_score(&self) -> f64 {
        self.technical_impact_score
    }

    /// Mean weight of the four business impact factors.
    pub fn business_impact_score(&self) -> f64 {
        self.business_impact_score
    }

    pub fn likelihood(&self) -> Level {
        Level::from_score(self.likelihood_score)
    }

    pub fn technical_impact(&self) -> Level {
        Level::from_score(self.technical_impact_score)
    }

    pub fn business_impact(&self) -> Level {
        Level::from_score(self.business_impact_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_closed_open() {
        assert_eq!(Level::from_score(2.999_999_999), Level::Low);
        assert_eq!(Level::from_score(3.0), Level::Medium);
        assert_eq!(Level::from_score(5.999_999_999), Level::Medium);
        assert_eq!(Level::from_score(6.0), Level::High);
    }

    #[test]
    fn extremes_of_weight_range() {
        assert_eq!(Level::from_score(0.0), Level::Low);
        assert_eq!(Level::from_score(9.0), Level::High);
    }

    #[test]
    fn nan_classifies_high() {
        assert_eq!(Level::from_score(f64::NAN), Level::High);
    }

    #[test]
    fn score_levels_follow_sub_scores() {
        let score = Score::new(3.0, 2.5, 6.0);
        assert_eq!(score.likelihood(), Level::Medium);
        assert_eq!(score.technical_impact(), Level::Low);
        assert_eq!(score.business_impact(), Level::High);
        assert_eq!(score.technical_impact_score(), 2.5);
    }

    #[test]
    fn level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Level::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(Level::High.to_string(), "HIGH");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn level_is_monotonic(a in 0.0..=9.0f64, b in 0.0..=9.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Level::from_score(lo) <= Level::from_score(hi));
        }

        #[test]
        fn level_matches_thresholds(value in -100.0..100.0f64) {
            let expected = if value < 3.0 {
                Level::Low
            } else if value < 6.0 {
                Level::Medium
            } else {
                Level::High
            };
            prop_assert_eq!(Level::from_score(value), expected);
        }
    }
}
