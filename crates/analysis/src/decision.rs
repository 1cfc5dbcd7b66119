//! Relationship classification from coefficient, statistic, and threshold.

use serde::{Deserialize, Serialize};

/// Classification of the relationship between the two sample components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    /// The statistic did not cross the critical threshold.
    None,
    /// Significant with a strong positive coefficient (r in [0.5, 1.0]).
    Direct,
    /// Significant with a strong negative coefficient (r in [-1.0, -0.5]).
    Inverse,
    /// Significant but the coefficient is too weak (|r| < 0.5) to name a
    /// direction.
    Inconclusive,
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relationship::None => write!(f, "no relationship"),
            Relationship::Direct => write!(f, "likely direct relationship"),
            Relationship::Inverse => write!(f, "likely inverse relationship"),
            Relationship::Inconclusive => write!(f, "significant but inconclusive"),
        }
    }
}

/// Classifies a tested correlation.
///
/// The statistic is compared two-tailed against the critical value; only
/// when it crosses the threshold is the coefficient's sign consulted. An
/// infinite statistic (perfectly linear sample) always crosses any finite
/// threshold; a NaN statistic fails the `<=` comparison and reaches the
/// coefficient branches, where an undefined coefficient falls through both
/// range checks into `Inconclusive` rather than being mislabeled.
#[must_use]
pub fn classify(r: f64, t: f64, critical_value: f64) -> Relationship {
    if t.abs() <= critical_value {
        return Relationship::None;
    }
    if (-1.0..=-0.5).contains(&r) {
        return Relationship::Inverse;
    }
    if (0.5..=1.0).contains(&r) {
        return Relationship::Direct;
    }
    Relationship::Inconclusive
}
