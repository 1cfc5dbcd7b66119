//! Analyze one or more JSON dataset files.

use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;
use corr_check_analysis::StudentsTable;
use corr_check_data::JsonDataSource;
use tracing::error;

use super::analyze_source;

/// Runs the analysis over each dataset file independently; a failure on
/// one file is reported and does not abort the rest.
pub fn run_analyze(files: &[String]) -> Result<()> {
    let table = StudentsTable::global();
    let mut failures = 0usize;

    for file in files {
        println!("Dataset file: {}", file.cyan());

        if let Err(err) = analyze_file(Path::new(file), table) {
            failures += 1;
            error!(file = %file, "dataset analysis failed");
            eprintln!("{} {err:#}", "error:".red().bold());
        }
    }

    if failures > 0 {
        bail!("{failures} of {} dataset(s) failed", files.len());
    }
    Ok(())
}

fn analyze_file(path: &Path, table: &StudentsTable) -> Result<()> {
    let source = JsonDataSource::from_path(path)?;
    analyze_source(&source, None, table)
}
