//! Wall-clock timing of single invocations.

use std::time::{Duration, Instant};

/// Runs `f` exactly once and returns its result with the elapsed wall time.
///
/// Measured with the monotonic [`Instant`] clock. The wrapped call's return
/// value comes back unmodified.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Like [`time`], but for fallible calls.
///
/// On error the partial timing is discarded and the error propagates
/// unchanged; nothing is retried.
pub fn try_time<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<(T, Duration), E> {
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed()))
}
