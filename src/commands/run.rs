//! Run Command Implementation
//!
//! The full sweep: for each sort implementation, toggle the macro, rebuild,
//! then measure every node count in the range under `perf stat`. Writes
//! results.json plus the two SVG charts into the output directory.

use crate::chart;
use crate::error::{CliError, Result};
use crate::output;
use crate::sweep::{self, SweepConfig};
use std::fs;
use std::path::Path;

pub(crate) fn run(config: &SweepConfig, out_dir: &Path) -> Result<()> {
    if !config.source.is_file() {
        return Err(CliError::FileNotFound(config.source.clone()));
    }
    if config.skip_build && !config.target.is_file() {
        return Err(CliError::FileNotFound(config.target.clone()));
    }

    print_header(config, out_dir);

    let results = sweep::run_sweep(config)?;

    fs::create_dir_all(out_dir)?;
    let json_path = out_dir.join("results.json");
    results.save(&json_path)?;
    chart::write_charts(&results, out_dir)?;

    output::success(&format!("wrote {}", json_path.display()));
    output::success(&format!(
        "wrote {} and {}",
        out_dir.join("cycles.svg").display(),
        out_dir.join("cache-misses.svg").display()
    ));
    Ok(())
}

fn print_header(config: &SweepConfig, out_dir: &Path) {
    output::section("Sort Sweep");
    output::kv("Source", config.source.display());
    output::kv("Target", config.target.display());
    output::kv("Trace file", config.trace_file.display());
    output::kv(
        "Sizes",
        format!(
            "{}..{} step {} ({} points)",
            config.sizes.min,
            config.sizes.max,
            config.sizes.step,
            config.sizes.len()
        ),
    );
    output::kv("perf repeat", config.repeat);
    output::kv("Output dir", out_dir.display());
}
