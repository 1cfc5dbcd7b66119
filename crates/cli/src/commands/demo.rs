//! Analyze the built-in reference dataset.

use anyhow::Result;
use corr_check_analysis::StudentsTable;
use corr_check_data::FixtureDataSource;

use super::analyze_source;

/// Runs the pipeline over the fixture dataset, optionally at an
/// overridden confidence probability.
pub fn run_demo(confidence: Option<f64>) -> Result<()> {
    analyze_source(&FixtureDataSource, confidence, StudentsTable::global())
}
