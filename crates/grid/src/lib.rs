//! Timed grid evaluation for binomial coefficient strategies.
//!
//! This crate runs one strategy over the triangular grid n in 1..=N,
//! k in 0..=n, times every call individually, and collects the results
//! into an immutable [`ResultTable`] for downstream aggregation.
//!
//! # Architecture
//!
//! ```text
//! evaluate_grid(n_max, strategy)
//!   ├─ try_time()     per call        (timing.rs)
//!   └─ ResultTable    (n, k) → Cell   (table.rs)
//! ```
//!
//! # Quick start
//!
//! ```
//! use binom_coeffs::direct_coefficient;
//! use binom_grid::evaluate_grid;
//!
//! let table = evaluate_grid(3, direct_coefficient)?;
//! assert_eq!(table.len(), 9);
//! assert_eq!(table.get(3, 1).unwrap().value, 3.0);
//! # Ok::<(), binom_grid::GridError>(())
//! ```

pub mod error;
pub mod evaluate;
pub mod table;
pub mod timing;

pub use error::GridError;
pub use evaluate::evaluate_grid;
pub use table::{Cell, ResultTable};
pub use timing::{time, try_time};
