//! Error types for the binom-coeffs crate.

/// Error type for all fallible operations in the binom-coeffs crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CoeffError {
    /// Returned when k lies outside the 0..=n range the operation requires.
    #[error("k out of range: k = {k} exceeds n = {n}")]
    KOutOfRange {
        /// Upper index of the query.
        n: u32,
        /// Lower index of the query.
        k: u32,
    },
}
