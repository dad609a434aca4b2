//! Pure conversion functions: CLI argument strings -> pipeline types.

use anyhow::{Result, bail};

use crate::pipeline::CacheScope;

/// Parses a cache scope name string into the corresponding enum variant.
pub fn parse_cache_scope(s: &str) -> Result<CacheScope> {
    match s.to_lowercase().as_str() {
        "fresh" => Ok(CacheScope::Fresh),
        "shared" => Ok(CacheScope::Shared),
        other => bail!("unknown cache scope: {other:?}"),
    }
}
