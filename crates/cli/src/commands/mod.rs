//! CLI subcommand implementations.

mod analyze;
mod demo;

pub use analyze::run_analyze;
pub use demo::run_demo;

use anyhow::{Context, Result};
use corr_check_analysis::{analyze as run_pipeline, StudentsTable};
use corr_check_core::{DataSource, Sample};

use crate::output::ReportFormatter;

/// Loads observations from a source, runs the analysis pipeline, and
/// prints the rendered report.
///
/// `confidence` overrides the source's own confidence probability when
/// given.
fn analyze_source(
    source: &dyn DataSource,
    confidence: Option<f64>,
    table: &StudentsTable,
) -> Result<()> {
    let points = source.points()?;
    let sample = Sample::new(points).context("dataset holds no observations")?;
    let confidence = confidence.unwrap_or_else(|| source.confidence_probability());

    let report = run_pipeline(sample, confidence, table)?;
    println!("{}", ReportFormatter::format(&report));
    Ok(())
}
