//! Aggregation error types.

/// Errors that can occur while collapsing result tables into series.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeriesError {
    /// A required grid cell was not found.
    #[error("cell ({n}, {k}) not found in {table} table")]
    MissingEntry { n: u32, k: u32, table: String },

    /// The exact baseline value is zero, so no relative error can be formed.
    #[error("exact value at ({n}, {k}) is zero: relative error undefined")]
    ZeroExactValue { n: u32, k: u32 },
}
