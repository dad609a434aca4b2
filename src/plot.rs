//! SVG chart rendering for benchmark reports.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::pipeline::BenchReport;

const SERIES_COLORS: [RGBColor; 5] = [BLUE, RED, GREEN, MAGENTA, BLACK];

/// Renders the per-strategy runtime-by-n line chart.
pub fn render_runtime_chart(report: &BenchReport, out_path: &Path) -> Result<()> {
    let x_max = f64::from(report.n_max.max(2));
    let y_max = report
        .strategies
        .iter()
        .flat_map(|s| s.runtime_by_n.iter().copied())
        .fold(0.0f64, f64::max)
        .max(1e-9);

    let root = SVGBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Strategy runtime by n (N = {})", report.n_max),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, 0.0..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("n")
        .y_desc("row time [s]")
        .x_labels(10)
        .draw()?;

    for (i, strategy) in report.strategies.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        let line = strategy
            .runtime_by_n
            .iter()
            .enumerate()
            .map(|(row, &secs)| ((row + 1) as f64, secs));
        chart
            .draw_series(LineSeries::new(line, color))?
            .label(strategy.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write chart: {}", out_path.display()))?;
    Ok(())
}

/// Renders the approximation error-by-n line chart.
pub fn render_error_chart(report: &BenchReport, out_path: &Path) -> Result<()> {
    let x_max = f64::from(report.n_max.max(2));
    let y_max = report
        .errors
        .iter()
        .flat_map(|e| e.error_by_n.iter().copied())
        .fold(0.0f64, f64::max)
        .max(1e-3);

    let root = SVGBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Approximation error by n (N = {})", report.n_max),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, 0.0..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("n")
        .y_desc("mean relative error")
        .x_labels(10)
        .draw()?;

    for (i, error) in report.errors.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        let line = error
            .error_by_n
            .iter()
            .enumerate()
            .map(|(row, &err)| ((row + 1) as f64, err));
        chart
            .draw_series(LineSeries::new(line, color))?
            .label(error.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write chart: {}", out_path.display()))?;
    Ok(())
}
