//! Bench command: time every strategy and print the summary.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use binom_coeffs::PascalCache;

use crate::cli::BenchArgs;
use crate::convert;
use crate::pipeline;
use crate::report;

/// Run the benchmark pipeline and report the results.
pub fn run(args: BenchArgs) -> Result<()> {
    let _cmd = info_span!("bench").entered();

    // 1. Resolve the cache scope
    let scope = convert::parse_cache_scope(&args.cache)?;

    // 2. Run every strategy over the grid
    let mut shared_cache = PascalCache::new();
    let bench = pipeline::run_benchmarks(args.max_n, scope, &mut shared_cache)?;
    info!(n_max = bench.n_max, "benchmarks complete");

    // 3. Optional JSON diagnostics
    if let Some(ref path) = args.json {
        let json = report::to_json(&bench)?;
        std::fs::write(path, &json)
            .with_context(|| format!("failed to write diagnostics: {}", path.display()))?;
        info!(path = %path.display(), "diagnostics written");
    }

    // 4. Print the summary block
    print!("{}", report::format_summary(&bench));

    Ok(())
}
