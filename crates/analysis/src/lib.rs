//! Statistical analysis for bivariate samples.
//!
//! This crate provides:
//! - `CorrelationEngine` - derived series, aggregate sums, Pearson coefficient,
//!   and the t-like significance statistic
//! - `StudentsTable` - two-tailed Student's t critical values with a
//!   ceiling/nearest lookup
//! - `classify` - relationship classification from coefficient, statistic,
//!   and critical value
//! - `analyze` - the full pipeline producing a `CorrelationReport`

pub mod decision;
pub mod engine;
pub mod error;
pub mod report;
pub mod students;

pub use decision::{classify, Relationship};
pub use engine::{CorrelationEngine, MIN_SIGNIFICANCE_LEN};
pub use error::AnalysisError;
pub use report::{analyze, CorrelationReport};
pub use students::StudentsTable;
