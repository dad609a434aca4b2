//! Plot command: render runtime and error charts from a benchmark run.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use binom_coeffs::PascalCache;

use crate::cli::PlotArgs;
use crate::convert;
use crate::pipeline;
use crate::plot;

/// Run the benchmark pipeline and render its charts.
pub fn run(args: PlotArgs) -> Result<()> {
    let _cmd = info_span!("plot").entered();

    // 1. Resolve the cache scope
    let scope = convert::parse_cache_scope(&args.cache)?;

    // 2. Run every strategy over the grid
    let mut shared_cache = PascalCache::new();
    let bench = pipeline::run_benchmarks(args.max_n, scope, &mut shared_cache)?;

    // 3. Render the charts
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output dir: {}", args.out_dir.display()))?;

    let runtime_path = args.out_dir.join("runtime.svg");
    plot::render_runtime_chart(&bench, &runtime_path)?;
    info!(path = %runtime_path.display(), "runtime chart written");

    let error_path = args.out_dir.join("error.svg");
    plot::render_error_chart(&bench, &error_path)?;
    info!(path = %error_path.display(), "error chart written");

    Ok(())
}
