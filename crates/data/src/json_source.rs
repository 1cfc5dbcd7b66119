//! File-backed JSON dataset source.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use corr_check_core::{DataSource, Point};
use serde::Deserialize;
use tracing::debug;

/// On-disk dataset layout.
///
/// ```json
/// {
///   "confidence_probability": 0.95,
///   "points": [ { "x": 2.7, "y": 15.6 }, ... ]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct DatasetFile {
    confidence_probability: f64,
    points: Vec<Point>,
}

/// A dataset loaded from a JSON file.
#[derive(Debug)]
pub struct JsonDataSource {
    dataset: DatasetFile,
}

impl JsonDataSource {
    /// Reads and parses a dataset file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid dataset
    /// JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset file: {}", path.display()))?;
        let dataset: DatasetFile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse dataset file: {}", path.display()))?;

        debug!(
            path = %path.display(),
            points = dataset.points.len(),
            confidence = dataset.confidence_probability,
            "dataset loaded"
        );

        Ok(Self { dataset })
    }
}

impl DataSource for JsonDataSource {
    fn points(&self) -> Result<Vec<Point>> {
        Ok(self.dataset.points.clone())
    }

    fn confidence_probability(&self) -> f64 {
        self.dataset.confidence_probability
    }
}
