//! Exact strategies: factorial ratio and the unmemoized Pascal recurrence.

use crate::error::CoeffError;

/// Factorial as `f64`, by plain recursion. Returns 1.0 for n <= 1.
///
/// Unmemoized: every call recomputes the full product chain, and that
/// per-call cost is exactly what the timing harness measures. Overflows to
/// `f64::INFINITY` for n >= 171; the non-finite value propagates to callers
/// as a value, never as an error.
pub fn factorial(n: u32) -> f64 {
    if n <= 1 {
        1.0
    } else {
        n as f64 * factorial(n - 1)
    }
}

/// Binomial coefficient via the factorial ratio n! / (k! (n−k)!).
///
/// The result is floating-point, not integer-exact: factorials round above
/// 18! and overflow above 170!, so the ratio sits on the same numeric
/// footing as the approximation strategies it is compared against.
///
/// # Errors
///
/// Returns [`CoeffError::KOutOfRange`] if `k > n`.
pub fn direct_coefficient(n: u32, k: u32) -> Result<f64, CoeffError> {
    if k > n {
        return Err(CoeffError::KOutOfRange { n, k });
    }
    Ok(factorial(n) / (factorial(k) * factorial(n - k)))
}

/// Binomial coefficient via the Pascal recurrence, unmemoized.
///
/// Base cases: 1.0 when `k == 0`, 0.0 when `k > n`; otherwise
/// `C(n−1, k−1) + C(n−1, k)`. The call count grows with the coefficient
/// itself (every unit of the answer is a separate leaf call), so this is
/// the slow reference path. Recursion depth grows only linearly with n.
pub fn pascal_recurrence(n: u32, k: u32) -> f64 {
    if k == 0 {
        1.0
    } else if k > n {
        0.0
    } else {
        pascal_recurrence(n - 1, k - 1) + pascal_recurrence(n - 1, k)
    }
}
