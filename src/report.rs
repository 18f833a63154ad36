// report.rs
use crate::config::ExampleLot;
use crate::model::TrainingReport;
use chrono::{DateTime, Local};
use std::fmt::{self, Write};

/// Renders the console report: metrics, F-test table, coefficients,
/// intercept and the example prediction.
pub fn render_report(
    report: &TrainingReport,
    example: &ExampleLot,
    prediction: f64,
    generated_at: DateTime<Local>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Lot price model: {}", report.variant)?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(
        out,
        "Listings: {} read, {} used, {} incomplete",
        report.listings_seen, report.rows_used, report.rows_incomplete
    )?;
    if let Some(outliers) = &report.outliers {
        writeln!(
            out,
            "Price outliers removed: {} (bounds {:.2} .. {:.2})",
            outliers.removed, outliers.bounds.lower, outliers.bounds.upper
        )?;
    }

    writeln!(out, "\nModel metrics (in-sample):")?;
    writeln!(out, "R²: {:.4}", report.r2)?;
    writeln!(out, "MSE: {:.2}", report.mse)?;

    let name_width = report
        .feature_tests
        .iter()
        .map(|t| t.feature.chars().count())
        .chain(std::iter::once("Feature".len()))
        .max()
        .unwrap_or(0);

    writeln!(out, "\nF-test, statistical significance:")?;
    writeln!(out, "{:<name_width$}  {:>14}  {:>12}", "Feature", "F", "p-value")?;
    for test in &report.feature_tests {
        writeln!(
            out,
            "{:<name_width$}  {:>14.4}  {:>12.4e}",
            test.feature, test.f_statistic, test.p_value
        )?;
    }

    writeln!(out, "\nModel coefficients:")?;
    writeln!(out, "{:<name_width$}  {:>16}", "Feature", "Coefficient")?;
    for (feature, coefficient) in &report.coefficients {
        writeln!(out, "{:<name_width$}  {:>16.4}", feature, coefficient)?;
    }
    writeln!(out, "\nIntercept: {:.2}", report.intercept)?;

    writeln!(
        out,
        "\nPrediction for {} m² lot in {}: {}",
        example.area,
        example.neighborhood,
        format_brl(prediction)
    )?;

    Ok(out)
}

/// `R$1,234,567.89`: comma thousands separator, two decimals.
pub fn format_brl(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}R${grouped}.{cents}")
}
