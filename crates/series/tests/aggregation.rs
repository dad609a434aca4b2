//! Aggregation over tables produced by the real strategies.

use approx::assert_abs_diff_eq;
use binom_coeffs::{
    PascalCache, approximate_by_equation, approximate_by_stirling_ratio, direct_coefficient,
    pascal_memoized,
};
use binom_grid::evaluate_grid;
use binom_series::{error_series, runtime_series};

/// Runtime series over the direct strategy: one non-negative entry per row,
/// consistent with the table's own total.
#[test]
fn runtime_series_matches_table_total() {
    let table = evaluate_grid(20, direct_coefficient).unwrap();
    let series = runtime_series(&table, 20).unwrap();

    assert_eq!(series.len(), 20);
    assert!(series.iter().all(|&s| s >= 0.0));

    let sum: f64 = series.iter().sum();
    assert_abs_diff_eq!(sum, table.total_time().as_secs_f64(), epsilon = 1e-9);
}

/// Saddle-point error against the exact baseline: zero on the first row
/// (both columns there are boundary cases) and a few percent by n = 20.
#[test]
fn equation_error_shrinks_to_a_few_percent() {
    let exact = evaluate_grid(20, direct_coefficient).unwrap();
    let approx = evaluate_grid(20, approximate_by_equation).unwrap();
    let errors = error_series(&exact, &approx, 20).unwrap();

    assert_eq!(errors.len(), 20);
    assert_eq!(errors[0], 0.0);
    assert!(errors[19] > 0.0);
    assert!(errors[19] < 0.05);
}

/// Stirling-ratio error likewise lands within a few percent and improves
/// on its own small-n rows.
#[test]
fn stirling_ratio_error_stays_small() {
    let exact = evaluate_grid(20, direct_coefficient).unwrap();
    let approx = evaluate_grid(20, approximate_by_stirling_ratio).unwrap();
    let errors = error_series(&exact, &approx, 20).unwrap();

    assert!(errors[19] < 0.05);
    assert!(errors[19] < errors[1]);
}

/// The memoized strategy's grid composes with the aggregator end to end.
#[test]
fn memoized_runtime_series_end_to_end() {
    let mut cache = PascalCache::new();
    let table = evaluate_grid(12, |n, k| Ok(pascal_memoized(n, k, &mut cache))).unwrap();

    let series = runtime_series(&table, 12).unwrap();
    assert_eq!(series.len(), 12);
    assert!(series.iter().all(|&s| s >= 0.0));
}
