//! Memoized Pascal recurrence with an explicit, caller-owned cache.

use std::collections::HashMap;

/// Reusable memoization cache for [`pascal_memoized`].
///
/// Maps (n, k) to the computed coefficient. Entries are never evicted and
/// there is no way to clear the map — a cache value only ever grows. Scope
/// is therefore the caller's choice: construct a fresh value per benchmark
/// run for fair timing, or keep one alive across runs to reproduce
/// warm-cache behavior. A second run against a warm cache answers every
/// already-seen query without re-deriving it, which biases its timings
/// downward; callers comparing runs must account for that.
///
/// # Example
///
/// ```
/// use binom_coeffs::{PascalCache, pascal_memoized};
///
/// let mut cache = PascalCache::new();
/// assert_eq!(pascal_memoized(6, 3, &mut cache), 20.0);
/// assert!(cache.contains(6, 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PascalCache {
    entries: HashMap<(u32, u32), f64>,
}

impl PascalCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the number of cached (n, k) pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the pair (n, k) has already been computed.
    pub fn contains(&self, n: u32, k: u32) -> bool {
        self.entries.contains_key(&(n, k))
    }
}

/// Binomial coefficient via the Pascal recurrence, memoized.
///
/// Identical recurrence to [`crate::pascal_recurrence`], but every (n, k)
/// pair is looked up in `cache` before computing and inserted after, so a
/// hit short-circuits the entire subtree below it. Base-case results are
/// cached like any other pair.
pub fn pascal_memoized(n: u32, k: u32, cache: &mut PascalCache) -> f64 {
    if let Some(&value) = cache.entries.get(&(n, k)) {
        return value;
    }
    let value = if k == 0 {
        1.0
    } else if k > n {
        0.0
    } else {
        pascal_memoized(n - 1, k - 1, cache) + pascal_memoized(n - 1, k, cache)
    };
    cache.entries.insert((n, k), value);
    value
}
