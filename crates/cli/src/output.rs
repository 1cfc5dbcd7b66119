//! Plain-text rendering of a `CorrelationReport`.

#![allow(clippy::format_push_string)]

use colored::Colorize;
use corr_check_analysis::{CorrelationReport, Relationship};

const DELIMITER: &str = "════════════════════════════════════════════════════════════";

pub struct ReportFormatter;

impl ReportFormatter {
    /// Renders the observation table, aggregate sums, and the verdict.
    #[must_use]
    pub fn format(report: &CorrelationReport) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&format!(
            "{:>4}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}\n",
            "N", "X_i", "Y_i", "X_i * Y_i", "X_i^2", "Y_i^2"
        ));
        for i in 0..report.n {
            output.push_str(&format!(
                "{:>4}  {:>12.4}  {:>12.4}  {:>12.4}  {:>12.4}  {:>12.4}\n",
                i + 1,
                report.data_x[i],
                report.data_y[i],
                report.product_xy[i],
                report.product_xx[i],
                report.product_yy[i],
            ));
        }
        output.push_str(&format!(
            "{:>4}  {:>12.4}  {:>12.4}  {:>12.4}  {:>12.4}  {:>12.4}\n",
            "sum", report.sum_x, report.sum_y, report.sum_xy, report.sum_xx, report.sum_yy,
        ));

        output.push_str(DELIMITER);
        output.push('\n');
        output.push_str(&format!(
            "Correlation coefficient: {:.4}\n",
            report.coefficient
        ));
        output.push_str(&format!(
            "Significance statistic:  {:.4}\n",
            report.statistic
        ));
        output.push_str(&format!(
            "Critical value:          {:.4} (alpha {:.4}, {} degrees of freedom)\n",
            report.critical_value, report.alpha, report.degrees_of_freedom,
        ));
        output.push_str(DELIMITER);
        output.push('\n');

        if !report.coefficient.is_finite() {
            output.push_str(&format!(
                "{}\n",
                "Correlation undefined: one of the series is constant."
                    .yellow()
                    .bold()
            ));
            return output;
        }

        let comparison = if report.statistic.abs() <= report.critical_value {
            "<="
        } else {
            ">"
        };
        output.push_str(&format!(
            "|{:.4}| {} {:.4}\n",
            report.statistic, comparison, report.critical_value,
        ));

        let text = report.relationship.to_string();
        let verdict = match report.relationship {
            Relationship::None => text.as_str().normal(),
            Relationship::Direct => text.as_str().green().bold(),
            Relationship::Inverse => text.as_str().red().bold(),
            Relationship::Inconclusive => text.as_str().yellow().bold(),
        };
        output.push_str(&format!("Verdict: {verdict}\n"));

        output
    }
}
