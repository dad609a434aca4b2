//! Benchmark pipeline: evaluate every strategy and aggregate its series.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use binom_coeffs::{
    PascalCache, approximate_by_equation, approximate_by_stirling_ratio, direct_coefficient,
    pascal_memoized, pascal_recurrence,
};
use binom_grid::{ResultTable, evaluate_grid};
use binom_series::{error_series, runtime_series};

/// Scope of the memoized strategy's cache across benchmark runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheScope {
    /// A new cache per run: fair, repeatable per-run timings.
    Fresh,
    /// One long-lived cache reused across runs and never cleared. Every run
    /// after the first answers warm queries without re-deriving them, so
    /// the memoized timings carry the warm-cache advantage of the earlier
    /// runs.
    Shared,
}

impl CacheScope {
    /// Lowercase name as accepted by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            CacheScope::Fresh => "fresh",
            CacheScope::Shared => "shared",
        }
    }
}

/// Timing results of a single strategy over the grid.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyBench {
    /// Strategy display name.
    pub name: &'static str,
    /// Sum of all per-call timings, in seconds.
    pub total_seconds: f64,
    /// Per-row runtime sums, entry i covering row n = i + 1.
    pub runtime_by_n: Vec<f64>,
}

/// Mean relative error of one approximation against the exact baseline.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBench {
    /// Approximation display name.
    pub name: &'static str,
    /// Per-row mean relative errors, entry i covering row n = i + 1.
    pub error_by_n: Vec<f64>,
}

/// Complete output of one benchmark run.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    /// Largest grid row.
    pub n_max: u32,
    /// Cache scope used for the memoized strategy.
    pub cache_scope: CacheScope,
    /// Cache entries present after the memoized run.
    pub cache_entries: usize,
    /// One timing entry per strategy.
    pub strategies: Vec<StrategyBench>,
    /// One error entry per approximation.
    pub errors: Vec<ErrorBench>,
}

/// Runs all five strategies over the grid up to `n_max` and aggregates
/// their runtime and error series.
///
/// The direct factorial-ratio table doubles as the exact baseline for both
/// approximation error series. `shared_cache` is only used when `scope` is
/// [`CacheScope::Shared`]; a fresh-scoped run builds its own cache and
/// discards it afterwards, leaving `shared_cache` untouched.
pub fn run_benchmarks(
    n_max: u32,
    scope: CacheScope,
    shared_cache: &mut PascalCache,
) -> Result<BenchReport> {
    // Step 1: Evaluate the exact strategies
    info!(n_max, ?scope, "evaluating exact strategies");
    let direct = evaluate_grid(n_max, direct_coefficient).context("direct strategy failed")?;
    let recursive = evaluate_grid(n_max, |n, k| Ok(pascal_recurrence(n, k)))
        .context("recursive strategy failed")?;

    let (memoized, cache_entries) = match scope {
        CacheScope::Fresh => {
            let mut cache = PascalCache::new();
            let table = evaluate_grid(n_max, |n, k| Ok(pascal_memoized(n, k, &mut cache)))
                .context("memoized strategy failed")?;
            let entries = cache.len();
            (table, entries)
        }
        CacheScope::Shared => {
            let table = evaluate_grid(n_max, |n, k| Ok(pascal_memoized(n, k, shared_cache)))
                .context("memoized strategy failed")?;
            (table, shared_cache.len())
        }
    };
    info!(cache_entries, "memoized strategy evaluated");

    // Step 2: Evaluate the approximations
    let equation =
        evaluate_grid(n_max, approximate_by_equation).context("equation strategy failed")?;
    let stirling = evaluate_grid(n_max, approximate_by_stirling_ratio)
        .context("stirling-ratio strategy failed")?;

    // Step 3: Aggregate runtime series per strategy
    let strategies = vec![
        bench_entry("direct", &direct, n_max)?,
        bench_entry("recursive", &recursive, n_max)?,
        bench_entry("memoized", &memoized, n_max)?,
        bench_entry("equation", &equation, n_max)?,
        bench_entry("stirling-ratio", &stirling, n_max)?,
    ];

    // Step 4: Aggregate error series against the exact baseline
    let errors = vec![
        error_entry("equation", &direct, &equation, n_max)?,
        error_entry("stirling-ratio", &direct, &stirling, n_max)?,
    ];

    Ok(BenchReport {
        n_max,
        cache_scope: scope,
        cache_entries,
        strategies,
        errors,
    })
}

fn bench_entry(name: &'static str, table: &ResultTable, n_max: u32) -> Result<StrategyBench> {
    let runtime_by_n = runtime_series(table, n_max)
        .with_context(|| format!("runtime aggregation failed for {name}"))?;
    Ok(StrategyBench {
        name,
        total_seconds: table.total_time().as_secs_f64(),
        runtime_by_n,
    })
}

fn error_entry(
    name: &'static str,
    exact: &ResultTable,
    approx: &ResultTable,
    n_max: u32,
) -> Result<ErrorBench> {
    let error_by_n = error_series(exact, approx, n_max)
        .with_context(|| format!("error aggregation failed for {name}"))?;
    Ok(ErrorBench { name, error_by_n })
}
