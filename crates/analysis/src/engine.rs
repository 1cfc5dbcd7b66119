//! Statistics engine for bivariate samples.
//!
//! Derived per-element products and aggregate sums are computed once at
//! construction; every getter afterwards is a pure read.

use corr_check_core::Sample;
use tracing::debug;

use crate::error::AnalysisError;

/// Minimum sample size for the significance statistic (t divides by N - 2).
pub const MIN_SIGNIFICANCE_LEN: usize = 3;

/// Computes correlation statistics for a fixed bivariate sample.
///
/// The Pearson coefficient for N observations is:
/// ```text
/// r = (N*SumXY - SumX*SumY) / sqrt((N*SumXX - SumX^2) * (N*SumYY - SumY^2))
/// ```
/// and the significance statistic compared against Student's t:
/// ```text
/// t = r * sqrt(N - 2) / sqrt(1 - r^2)
/// ```
///
/// Non-finite results are propagated faithfully: a constant x or y series
/// yields NaN for `r` (zero-variance denominator), and |r| = 1 yields an
/// infinite `t`. Callers interpret those, this type never masks them.
#[derive(Debug, Clone)]
pub struct CorrelationEngine {
    sample: Sample,
    product_xx: Vec<f64>,
    product_xy: Vec<f64>,
    product_yy: Vec<f64>,
    sum_x: f64,
    sum_y: f64,
    sum_xx: f64,
    sum_xy: f64,
    sum_yy: f64,
}

impl CorrelationEngine {
    /// Builds the engine, eagerly deriving the product series and sums.
    #[must_use]
    pub fn new(sample: Sample) -> Self {
        let points = sample.points();

        let product_xx: Vec<f64> = points.iter().map(|p| p.x * p.x).collect();
        let product_xy: Vec<f64> = points.iter().map(|p| p.x * p.y).collect();
        let product_yy: Vec<f64> = points.iter().map(|p| p.y * p.y).collect();

        let sum_x: f64 = points.iter().map(|p| p.x).sum();
        let sum_y: f64 = points.iter().map(|p| p.y).sum();
        let sum_xx: f64 = product_xx.iter().sum();
        let sum_xy: f64 = product_xy.iter().sum();
        let sum_yy: f64 = product_yy.iter().sum();

        debug!(
            n = points.len(),
            sum_x, sum_y, sum_xx, sum_xy, sum_yy, "derived aggregate sums"
        );

        Self {
            sample,
            product_xx,
            product_xy,
            product_yy,
            sum_x,
            sum_y,
            sum_xx,
            sum_xy,
            sum_yy,
        }
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    /// Always false; the sample is validated non-empty at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    /// The x components, in input order.
    #[must_use]
    pub fn data_x(&self) -> Vec<f64> {
        self.sample.points().iter().map(|p| p.x).collect()
    }

    /// The y components, in input order.
    #[must_use]
    pub fn data_y(&self) -> Vec<f64> {
        self.sample.points().iter().map(|p| p.y).collect()
    }

    /// Elementwise x_i * x_i, in input order.
    #[must_use]
    pub fn product_xx(&self) -> &[f64] {
        &self.product_xx
    }

    /// Elementwise x_i * y_i, in input order.
    #[must_use]
    pub fn product_xy(&self) -> &[f64] {
        &self.product_xy
    }

    /// Elementwise y_i * y_i, in input order.
    #[must_use]
    pub fn product_yy(&self) -> &[f64] {
        &self.product_yy
    }

    /// Sum of the x components.
    #[must_use]
    pub fn sum_x(&self) -> f64 {
        self.sum_x
    }

    /// Sum of the y components.
    #[must_use]
    pub fn sum_y(&self) -> f64 {
        self.sum_y
    }

    /// Sum of x_i * x_i.
    #[must_use]
    pub fn sum_xx(&self) -> f64 {
        self.sum_xx
    }

    /// Sum of x_i * y_i.
    #[must_use]
    pub fn sum_xy(&self) -> f64 {
        self.sum_xy
    }

    /// Sum of y_i * y_i.
    #[must_use]
    pub fn sum_yy(&self) -> f64 {
        self.sum_yy
    }

    /// Pearson correlation coefficient.
    ///
    /// Returns NaN when x or y is constant across the sample (zero variance
    /// makes the denominator zero); callers must treat a non-finite result
    /// as "correlation undefined for constant series".
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn correlation_coefficient(&self) -> f64 {
        let n = self.sample.len() as f64;

        let numerator = n * self.sum_xy - self.sum_x * self.sum_y;
        let denominator = ((n * self.sum_xx - self.sum_x * self.sum_x)
            * (n * self.sum_yy - self.sum_y * self.sum_y))
            .sqrt();

        numerator / denominator
    }

    /// Significance statistic compared against Student's t critical values.
    ///
    /// Infinite when |r| = 1 (perfectly linear sample) and NaN when the
    /// coefficient itself is undefined; both propagate unchanged so
    /// downstream threshold comparisons can reason about them
    /// (|inf| exceeds any finite threshold).
    ///
    /// # Errors
    /// Returns `AnalysisError::InsufficientSample` when the sample holds
    /// fewer than `MIN_SIGNIFICANCE_LEN` observations.
    #[allow(clippy::cast_precision_loss)]
    pub fn significance_statistic(&self) -> Result<f64, AnalysisError> {
        let len = self.sample.len();
        if len < MIN_SIGNIFICANCE_LEN {
            return Err(AnalysisError::InsufficientSample { len });
        }

        let r = self.correlation_coefficient();
        Ok(r * ((len - 2) as f64).sqrt() / (1.0 - r * r).sqrt())
    }
}
