//! Error types for the binom-grid crate.

use binom_coeffs::CoeffError;

/// Error type for all fallible operations in the binom-grid crate.
///
/// Covers invalid grid bounds and strategy failures surfaced during
/// evaluation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// Coefficient strategy error, propagated unchanged.
    #[error(transparent)]
    Strategy(#[from] CoeffError),

    /// Returned when the requested grid has no rows.
    #[error("invalid grid bound: max n must be at least 1, got {n_max}")]
    InvalidMaxN {
        /// Largest row requested.
        n_max: u32,
    },
}
