//! Full-grid scenario tests against the known small triangle.

use std::time::Duration;

use binom_coeffs::{PascalCache, direct_coefficient, pascal_memoized, pascal_recurrence};
use binom_grid::evaluate_grid;

/// The N = 3 grid of the direct strategy holds exactly the first three
/// rows of Pascal's triangle.
#[test]
fn direct_grid_matches_pascals_triangle() {
    let table = evaluate_grid(3, direct_coefficient).unwrap();

    let expected = [
        ((1, 0), 1.0),
        ((1, 1), 1.0),
        ((2, 0), 1.0),
        ((2, 1), 2.0),
        ((2, 2), 1.0),
        ((3, 0), 1.0),
        ((3, 1), 3.0),
        ((3, 2), 3.0),
        ((3, 3), 1.0),
    ];
    assert_eq!(table.len(), expected.len());
    for ((n, k), value) in expected {
        assert_eq!(table.get(n, k).unwrap().value, value, "cell ({n}, {k})");
    }
}

/// Cells come back in row-major order.
#[test]
fn iteration_order_is_row_major() {
    let table = evaluate_grid(3, |_, _| Ok(0.5)).unwrap();
    let order: Vec<(u32, u32)> = table.cells().map(|(n, k, _)| (n, k)).collect();
    assert_eq!(
        order,
        vec![
            (1, 0),
            (1, 1),
            (2, 0),
            (2, 1),
            (2, 2),
            (3, 0),
            (3, 1),
            (3, 2),
            (3, 3),
        ]
    );
}

/// The memoized strategy warms its cache in grid order; re-querying a cell
/// afterwards derives nothing new.
#[test]
fn memoized_strategy_warms_cache_through_grid() {
    let mut cache = PascalCache::new();
    let table = evaluate_grid(10, |n, k| Ok(pascal_memoized(n, k, &mut cache))).unwrap();

    assert_eq!(table.get(5, 2).unwrap().value, 10.0);
    assert!(cache.contains(5, 2));

    let len = cache.len();
    assert_eq!(pascal_memoized(5, 2, &mut cache), 10.0);
    assert_eq!(cache.len(), len);
}

/// Recurrence and direct strategies fill identical value grids.
#[test]
fn recurrence_grid_agrees_with_direct() {
    let direct = evaluate_grid(8, direct_coefficient).unwrap();
    let recurrence = evaluate_grid(8, |n, k| Ok(pascal_recurrence(n, k))).unwrap();

    assert_eq!(direct.len(), recurrence.len());
    for (n, k, cell) in direct.cells() {
        let other = recurrence.get(n, k).unwrap().value;
        assert_eq!(cell.value, other, "cell ({n}, {k})");
    }
}

/// The summary total equals the sum of the individual cell timings.
#[test]
fn total_time_is_sum_of_cells() {
    let table = evaluate_grid(5, direct_coefficient).unwrap();
    let manual: Duration = table.cells().map(|(_, _, cell)| cell.elapsed).sum();
    assert_eq!(table.total_time(), manual);
}
