//! Validated bivariate sample.

use crate::error::SampleError;
use crate::point::Point;

/// An ordered, immutable sequence of (x, y) observations.
///
/// A sample always holds at least one observation; the stricter N >= 3
/// requirement of the significance statistic is checked where that
/// statistic is requested, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    points: Vec<Point>,
}

impl Sample {
    /// Builds a sample from observations, preserving input order.
    ///
    /// # Errors
    /// Returns `SampleError::Empty` if `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<Self, SampleError> {
        if points.is_empty() {
            return Err(SampleError::Empty);
        }
        Ok(Self { points })
    }

    /// Observations in input order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
