use crate::point::Point;
use anyhow::Result;

/// A provider of bivariate observations plus the confidence probability
/// the analysis should be run at.
pub trait DataSource: Send + Sync {
    /// Observations in input order.
    ///
    /// # Errors
    /// Returns an error if the underlying source cannot be read or parsed.
    fn points(&self) -> Result<Vec<Point>>;

    /// Confidence probability in (0, 1), e.g. 0.95.
    fn confidence_probability(&self) -> f64;
}
