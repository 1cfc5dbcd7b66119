//! Error types for sample construction.

use thiserror::Error;

/// Errors that can occur when building a `Sample`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// The input contained no observations.
    #[error("sample must contain at least one observation")]
    Empty,
}
