//! Stirling-style closed-form approximations of the binomial coefficient.

use std::f64::consts::{E, PI};

use crate::error::CoeffError;

/// Stirling's approximation of n!.
///
/// Returns 1 for n = 0, otherwise `sqrt(2 * pi * n) * (n / e)^n`. The
/// relative error against the true factorial shrinks as n grows (about 8%
/// at n = 1, under 1% from n = 10 on).
pub fn stirling_factorial(n: u32) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let n = n as f64;
    (2.0 * PI * n).sqrt() * (n / E).powf(n)
}

/// Saddle-point closed form for C(n, k).
///
/// Returns 1 for the boundary columns k = 0 and k = n, otherwise
///
/// ```text
/// sqrt(n / (2 * pi * k * (n - k))) * n^n / (k^k * (n - k)^(n - k))
/// ```
///
/// The unguarded powers overflow to infinity for large n; the non-finite
/// value propagates silently rather than erroring.
///
/// # Example
///
/// ```
/// let approx = binom_coeffs::approximate_by_equation(20, 10)?;
/// let exact = 184_756.0;
/// assert!((approx - exact).abs() / exact < 0.05);
/// # Ok::<(), binom_coeffs::CoeffError>(())
/// ```
pub fn approximate_by_equation(n: u32, k: u32) -> Result<f64, CoeffError> {
    if k > n {
        return Err(CoeffError::KOutOfRange { n, k });
    }
    if k == 0 || k == n {
        return Ok(1.0);
    }
    let nf = n as f64;
    let kf = k as f64;
    let mf = (n - k) as f64;
    let prefactor = (nf / (2.0 * PI * kf * mf)).sqrt();
    Ok(prefactor * nf.powf(nf) / (kf.powf(kf) * mf.powf(mf)))
}

/// C(n, k) as a ratio of Stirling factorial approximations.
///
/// Returns `stirling_factorial(n) / (stirling_factorial(k) *
/// stirling_factorial(n - k))`. Algebraically this equals the saddle-point
/// form of [`approximate_by_equation`]; the two differ only in rounding and
/// in where the intermediate powers overflow.
pub fn approximate_by_stirling_ratio(n: u32, k: u32) -> Result<f64, CoeffError> {
    if k > n {
        return Err(CoeffError::KOutOfRange { n, k });
    }
    Ok(stirling_factorial(n) / (stirling_factorial(k) * stirling_factorial(n - k)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::exact::{direct_coefficient, factorial};

    #[test]
    fn test_stirling_factorial_base() {
        assert_eq!(stirling_factorial(0), 1.0);
        assert_relative_eq!(stirling_factorial(1), 0.922_137_008_9, epsilon = 1e-9);
    }

    #[test]
    fn test_stirling_error_shrinks_with_n() {
        let rel = |n: u32| (factorial(n) - stirling_factorial(n)).abs() / factorial(n);
        assert!(rel(10) < rel(1));
        assert!(rel(10) < 0.01);
    }

    #[test]
    fn test_equation_boundary_columns() {
        assert_eq!(approximate_by_equation(0, 0).unwrap(), 1.0);
        assert_eq!(approximate_by_equation(5, 0).unwrap(), 1.0);
        assert_eq!(approximate_by_equation(5, 5).unwrap(), 1.0);
    }

    #[test]
    fn test_equation_close_to_exact() {
        let exact = direct_coefficient(20, 10).unwrap();
        let approx = approximate_by_equation(20, 10).unwrap();
        assert!((approx - exact).abs() / exact < 0.05);

        // Small n is the worst case for the approximation.
        assert!((approximate_by_equation(5, 2).unwrap() - 10.0).abs() / 10.0 < 0.06);
    }

    #[test]
    fn test_stirling_ratio_close_to_exact() {
        let exact = direct_coefficient(20, 10).unwrap();
        let approx = approximate_by_stirling_ratio(20, 10).unwrap();
        assert!((approx - exact).abs() / exact < 0.05);
    }

    #[test]
    fn test_stirling_ratio_boundary_is_exact() {
        assert_eq!(approximate_by_stirling_ratio(7, 0).unwrap(), 1.0);
        assert_eq!(approximate_by_stirling_ratio(7, 7).unwrap(), 1.0);
    }

    #[test]
    fn test_equation_and_ratio_agree() {
        for (n, k) in [(4, 2), (12, 5), (30, 13)] {
            assert_relative_eq!(
                approximate_by_equation(n, k).unwrap(),
                approximate_by_stirling_ratio(n, k).unwrap(),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_k_out_of_range() {
        assert!(matches!(
            approximate_by_equation(3, 5),
            Err(CoeffError::KOutOfRange { n: 3, k: 5 })
        ));
        assert!(matches!(
            approximate_by_stirling_ratio(3, 5),
            Err(CoeffError::KOutOfRange { n: 3, k: 5 })
        ));
    }

    #[test]
    fn test_equation_overflows_to_infinity() {
        assert!(approximate_by_equation(144, 72).unwrap().is_infinite());
    }
}
