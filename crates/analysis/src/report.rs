//! Full analysis pipeline: engine, table lookup, and classification.

use corr_check_core::Sample;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::decision::{classify, Relationship};
use crate::engine::CorrelationEngine;
use crate::error::AnalysisError;
use crate::students::StudentsTable;

/// Everything computed for one sample, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Number of observations.
    pub n: usize,
    /// The x components, in input order.
    pub data_x: Vec<f64>,
    /// The y components, in input order.
    pub data_y: Vec<f64>,
    /// Elementwise x_i * x_i.
    pub product_xx: Vec<f64>,
    /// Elementwise x_i * y_i.
    pub product_xy: Vec<f64>,
    /// Elementwise y_i * y_i.
    pub product_yy: Vec<f64>,
    /// Sum of x.
    pub sum_x: f64,
    /// Sum of y.
    pub sum_y: f64,
    /// Sum of x squared.
    pub sum_xx: f64,
    /// Sum of x times y.
    pub sum_xy: f64,
    /// Sum of y squared.
    pub sum_yy: f64,
    /// Pearson correlation coefficient; NaN for constant series.
    pub coefficient: f64,
    /// Significance statistic; infinite at |r| = 1.
    pub statistic: f64,
    /// Confidence probability the analysis was run at.
    pub confidence: f64,
    /// Significance level, 1 - confidence.
    pub alpha: f64,
    /// Degrees of freedom, n - 2.
    pub degrees_of_freedom: u32,
    /// Tabulated critical threshold.
    pub critical_value: f64,
    /// Classification verdict.
    pub relationship: Relationship,
}

/// Runs the full analysis for one sample at the given confidence
/// probability.
///
/// The table's 0.0 out-of-range sentinel is converted into
/// `NoCriticalValue` here, before any comparison uses it.
///
/// # Errors
/// - `InvalidConfidence` when `confidence` is not strictly inside (0, 1)
/// - `InsufficientSample` when the sample holds fewer than 3 observations
/// - `NoCriticalValue` when the table has no entry for the derived
///   significance level and degrees of freedom
#[allow(clippy::cast_possible_truncation)]
pub fn analyze(
    sample: Sample,
    confidence: f64,
    table: &StudentsTable,
) -> Result<CorrelationReport, AnalysisError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(AnalysisError::InvalidConfidence(confidence));
    }

    let engine = CorrelationEngine::new(sample);
    let statistic = engine.significance_statistic()?;
    let coefficient = engine.correlation_coefficient();

    let n = engine.len();
    let alpha = 1.0 - confidence;
    let degrees_of_freedom = (n - 2) as u32;

    let critical_value = table.critical_value(alpha, degrees_of_freedom);
    if critical_value == 0.0 {
        return Err(AnalysisError::NoCriticalValue {
            alpha,
            dof: degrees_of_freedom,
        });
    }

    let relationship = classify(coefficient, statistic, critical_value);
    info!(
        n,
        coefficient, statistic, critical_value, %relationship, "sample analyzed"
    );

    Ok(CorrelationReport {
        n,
        data_x: engine.data_x(),
        data_y: engine.data_y(),
        product_xx: engine.product_xx().to_vec(),
        product_xy: engine.product_xy().to_vec(),
        product_yy: engine.product_yy().to_vec(),
        sum_x: engine.sum_x(),
        sum_y: engine.sum_y(),
        sum_xx: engine.sum_xx(),
        sum_xy: engine.sum_xy(),
        sum_yy: engine.sum_yy(),
        coefficient,
        statistic,
        confidence,
        alpha,
        degrees_of_freedom,
        critical_value,
        relationship,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use corr_check_core::Point;

    fn sample(points: &[(f64, f64)]) -> Sample {
        Sample::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    fn reference_sample() -> Sample {
        sample(&[
            (2.7, 15.6),
            (3.0, 15.3),
            (2.8, 15.6),
            (2.9, 15.2),
            (2.6, 15.9),
            (2.5, 16.1),
            (2.8, 15.5),
            (2.6, 16.0),
            (2.5, 16.2),
        ])
    }

    // ============================================
    // End-to-End Tests
    // ============================================

    #[test]
    fn reference_dataset_reports_inverse_relationship() {
        let report = analyze(reference_sample(), 0.95, StudentsTable::global()).unwrap();

        assert_eq!(report.n, 9);
        assert_eq!(report.degrees_of_freedom, 7);
        assert_eq!(report.critical_value, 2.365);
        assert!((report.coefficient - (-0.960_109_933_296_988_8)).abs() < 1e-12);
        assert!((report.statistic - (-9.084_423_809_934_464)).abs() < 1e-9);
        assert_eq!(report.relationship, Relationship::Inverse);
    }

    #[test]
    fn report_carries_series_and_sums() {
        let report = analyze(reference_sample(), 0.95, StudentsTable::global()).unwrap();

        assert_eq!(report.data_x.len(), 9);
        assert_eq!(report.product_xy.len(), 9);
        assert!((report.sum_x - 24.4).abs() < 1e-9);
        assert!((report.sum_xy - 382.87).abs() < 1e-9);
    }

    #[test]
    fn degenerate_sample_reports_undefined_coefficient() {
        let flat = sample(&[
            (1.0, 5.0),
            (2.0, 5.0),
            (3.0, 5.0),
            (4.0, 5.0),
            (5.0, 5.0),
        ]);
        let report = analyze(flat, 0.95, StudentsTable::global()).unwrap();

        assert!(report.coefficient.is_nan());
        assert!(report.statistic.is_nan());
        assert_eq!(report.relationship, Relationship::Inconclusive);
    }

    // ============================================
    // Precondition Tests
    // ============================================

    #[test]
    fn analyze_rejects_confidence_at_bounds() {
        let table = StudentsTable::global();
        let err = analyze(reference_sample(), 0.0, table).unwrap_err();
        assert_eq!(err, AnalysisError::InvalidConfidence(0.0));

        let err = analyze(reference_sample(), 1.0, table).unwrap_err();
        assert_eq!(err, AnalysisError::InvalidConfidence(1.0));
    }

    #[test]
    fn analyze_rejects_two_point_sample() {
        let err = analyze(
            sample(&[(1.0, 2.0), (2.0, 4.0)]),
            0.95,
            StudentsTable::global(),
        )
        .unwrap_err();
        assert_eq!(err, AnalysisError::InsufficientSample { len: 2 });
    }

    #[test]
    fn analyze_surfaces_table_sentinel_as_error() {
        // Confidence 0.9999 gives alpha below the smallest tabulated level.
        let err = analyze(reference_sample(), 0.9999, StudentsTable::global()).unwrap_err();
        assert!(matches!(err, AnalysisError::NoCriticalValue { dof: 7, .. }));
    }

    #[test]
    fn analyze_minimum_sample_uses_first_table_row() {
        let report = analyze(
            sample(&[(1.0, 2.1), (2.0, 3.9), (3.0, 6.2)]),
            0.95,
            StudentsTable::global(),
        )
        .unwrap();
        assert_eq!(report.degrees_of_freedom, 1);
        assert_eq!(report.critical_value, 12.71);
    }
}
