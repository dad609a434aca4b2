//! Grid evaluation: one timed strategy call per (n, k) pair.

use binom_coeffs::CoeffError;
use tracing::debug;

use crate::error::GridError;
use crate::table::{Cell, ResultTable};
use crate::timing::try_time;

/// Evaluates `strategy` over the full triangular grid up to `n_max`.
///
/// Enumerates n from 1 to `n_max` inclusive and, for each n, k from 0 to n
/// inclusive, timing every `strategy(n, k)` call individually and recording
/// value and duration in a fresh [`ResultTable`]. Rows are visited in
/// increasing n, columns within a row in increasing k — observable through
/// cache warm-up order when the strategy memoizes.
///
/// A strategy error aborts the evaluation: the partial table is dropped and
/// the error propagates unchanged.
///
/// # Errors
///
/// [`GridError::InvalidMaxN`] if `n_max` is 0, otherwise the strategy's own
/// error wrapped transparently as [`GridError::Strategy`].
#[tracing::instrument(skip(strategy))]
pub fn evaluate_grid<F>(n_max: u32, mut strategy: F) -> Result<ResultTable, GridError>
where
    F: FnMut(u32, u32) -> Result<f64, CoeffError>,
{
    if n_max < 1 {
        return Err(GridError::InvalidMaxN { n_max });
    }

    let mut table = ResultTable::new(n_max);
    for n in 1..=n_max {
        for k in 0..=n {
            let (value, elapsed) = try_time(|| strategy(n, k))?;
            table.insert(n, k, Cell { value, elapsed });
        }
    }

    debug!(cells = table.len(), total = ?table.total_time(), "grid evaluated");
    Ok(table)
}
