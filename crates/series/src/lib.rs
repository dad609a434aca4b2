//! Per-row aggregation of grid result tables.
//!
//! This crate collapses [`ResultTable`]s into per-n series for plotting
//! and reporting: total runtime per row, and mean relative error per row
//! between an exact table and an approximate one.
//!
//! # Quick start
//!
//! ```
//! use binom_coeffs::direct_coefficient;
//! use binom_grid::evaluate_grid;
//! use binom_series::{error_series, runtime_series};
//!
//! let table = evaluate_grid(5, direct_coefficient)?;
//!
//! let runtimes = runtime_series(&table, 5)?;
//! assert_eq!(runtimes.len(), 5);
//!
//! // A table compared against itself has no error anywhere.
//! let errors = error_series(&table, &table, 5)?;
//! assert!(errors.iter().all(|&e| e == 0.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use binom_grid::ResultTable;

pub mod error;

pub use error::SeriesError;

/// Sums each row's timings into one seconds value per n.
///
/// Entry i covers row n = i + 1. Requires every (n, k) with n in
/// 1..=n_max, k in 0..=n to be present in `table`. `n_max` may be smaller
/// than the table's own bound, in which case only that prefix is
/// aggregated.
///
/// # Errors
///
/// [`SeriesError::MissingEntry`] naming the first absent cell.
pub fn runtime_series(table: &ResultTable, n_max: u32) -> Result<Vec<f64>, SeriesError> {
    let mut series = Vec::with_capacity(n_max as usize);
    for n in 1..=n_max {
        let mut row_total = 0.0;
        for k in 0..=n {
            let cell = table.get(n, k).ok_or_else(|| SeriesError::MissingEntry {
                n,
                k,
                table: "runtime".to_string(),
            })?;
            row_total += cell.elapsed.as_secs_f64();
        }
        series.push(row_total);
    }
    Ok(series)
}

/// Mean relative error per row of an approximate table against an exact one.
///
/// Entry i is the mean over k = 0..=n of `|exact - approx| / exact` for
/// row n = i + 1. Both tables must cover the full grid for n in 1..=n_max.
/// Non-finite strategy values flow into the mean unchanged; a zero exact
/// value is an error because the quotient is undefined.
///
/// # Errors
///
/// [`SeriesError::MissingEntry`] naming the table with the absent cell, or
/// [`SeriesError::ZeroExactValue`] on a zero baseline value.
pub fn error_series(
    exact: &ResultTable,
    approx: &ResultTable,
    n_max: u32,
) -> Result<Vec<f64>, SeriesError> {
    let mut series = Vec::with_capacity(n_max as usize);
    for n in 1..=n_max {
        let mut row_sum = 0.0;
        for k in 0..=n {
            let exact_cell = exact.get(n, k).ok_or_else(|| SeriesError::MissingEntry {
                n,
                k,
                table: "exact".to_string(),
            })?;
            let approx_cell = approx.get(n, k).ok_or_else(|| SeriesError::MissingEntry {
                n,
                k,
                table: "approx".to_string(),
            })?;
            if exact_cell.value == 0.0 {
                return Err(SeriesError::ZeroExactValue { n, k });
            }
            row_sum += (exact_cell.value - approx_cell.value).abs() / exact_cell.value;
        }
        series.push(row_sum / (n + 1) as f64);
    }
    Ok(series)
}
