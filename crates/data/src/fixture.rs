//! Built-in reference dataset.

use anyhow::Result;
use corr_check_core::{DataSource, Point};

/// The lab's reference dataset: nine observations with a strong inverse
/// relationship, analyzed at 95% confidence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDataSource;

impl FixtureDataSource {
    const CONFIDENCE_PROBABILITY: f64 = 0.95;
}

impl DataSource for FixtureDataSource {
    fn points(&self) -> Result<Vec<Point>> {
        Ok(vec![
            Point::new(2.7, 15.6),
            Point::new(3.0, 15.3),
            Point::new(2.8, 15.6),
            Point::new(2.9, 15.2),
            Point::new(2.6, 15.9),
            Point::new(2.5, 16.1),
            Point::new(2.8, 15.5),
            Point::new(2.6, 16.0),
            Point::new(2.5, 16.2),
        ])
    }

    fn confidence_probability(&self) -> f64 {
        Self::CONFIDENCE_PROBABILITY
    }
}
