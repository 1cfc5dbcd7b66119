//! Error types for the analysis pipeline.

use thiserror::Error;

/// Errors that can occur while analyzing a sample.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// The significance statistic needs at least three observations
    /// (its denominator involves N - 2).
    #[error("sample of {len} observations is too small for a significance test (minimum 3)")]
    InsufficientSample {
        /// Number of observations in the rejected sample.
        len: usize,
    },

    /// Confidence probability outside the open interval (0, 1).
    #[error("confidence probability {0} must lie strictly between 0 and 1")]
    InvalidConfidence(f64),

    /// The critical-value table has no entry for the requested
    /// significance level and degrees of freedom.
    #[error("no tabulated critical value for alpha {alpha} at {dof} degrees of freedom")]
    NoCriticalValue {
        /// Requested significance level.
        alpha: f64,
        /// Requested degrees of freedom.
        dof: u32,
    },
}
