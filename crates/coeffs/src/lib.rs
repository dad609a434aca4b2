//! Binomial coefficient strategies for benchmarking.
//!
//! This crate computes C(n, k) through several distinct numeric routes
//! so that their runtime and accuracy can be compared:
//!
//! | Strategy | Form | Character |
//! |----------|------|-----------|
//! | [`direct_coefficient`] | `n! / (k! (n-k)!)` | Exact until `f64` overflow |
//! | [`pascal_recurrence`] | `C(n-1,k-1) + C(n-1,k)` | Exact, exponential call count |
//! | [`pascal_memoized`] | same recurrence, cached | Exact, one derivation per cell |
//! | [`approximate_by_equation`] | saddle-point closed form | Approximate, constant time |
//! | [`approximate_by_stirling_ratio`] | Stirling factorial ratio | Approximate, constant time |
//!
//! All strategies work in `f64` throughout, including the exact ones:
//! overflow behaves identically everywhere (infinity, never a panic or a
//! bigint fallback) and exact and approximate results stay directly
//! comparable.
//!
//! # Quick start
//!
//! ```
//! use binom_coeffs::{PascalCache, direct_coefficient, pascal_memoized};
//!
//! let exact = direct_coefficient(6, 3)?;
//! assert_eq!(exact, 20.0);
//!
//! let mut cache = PascalCache::new();
//! assert_eq!(pascal_memoized(6, 3, &mut cache), exact);
//! # Ok::<(), binom_coeffs::CoeffError>(())
//! ```
//!
//! The memoized recurrence takes its cache as an explicit `&mut` argument
//! rather than hiding it in global state, so the caller decides whether a
//! benchmark run starts cold or reuses a warm cache (see [`PascalCache`]).

pub mod approx;
pub mod cache;
pub mod error;
pub mod exact;

pub use approx::{approximate_by_equation, approximate_by_stirling_ratio, stirling_factorial};
pub use cache::{PascalCache, pascal_memoized};
pub use error::CoeffError;
pub use exact::{direct_coefficient, factorial, pascal_recurrence};
