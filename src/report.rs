//! Human-readable summary and JSON serialization of benchmark reports.

use anyhow::{Context, Result};

use crate::pipeline::BenchReport;

/// Formats the summary block printed after a benchmark run.
///
/// One line per strategy with its total grid time, then one line per
/// approximation with its mean relative error on the last row.
pub fn format_summary(report: &BenchReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Benchmark summary (N = {}, cache = {})\n",
        report.n_max,
        report.cache_scope.name()
    ));

    out.push_str(&format!("  {:<16} {:>14}\n", "strategy", "total time [s]"));
    for strategy in &report.strategies {
        out.push_str(&format!(
            "  {:<16} {:>14.6}\n",
            strategy.name, strategy.total_seconds
        ));
    }

    out.push('\n');
    out.push_str(&format!("  {:<16} {:>14}\n", "approximation", "error at N [%]"));
    for error in &report.errors {
        let last = error.error_by_n.last().copied().unwrap_or(0.0);
        out.push_str(&format!("  {:<16} {:>14.3}\n", error.name, last * 100.0));
    }

    out
}

/// Serializes a benchmark report as pretty-printed JSON.
pub fn to_json(report: &BenchReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize benchmark report")
}
