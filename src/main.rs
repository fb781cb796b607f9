//! sortsweep - queue sort micro-benchmark driver
//!
//! Toggles the queue harness between its two sort implementations
//! (`#define lsort 0` merge sort, `#define lsort 1` list_sort), rebuilds it,
//! and sweeps node counts under `perf stat`, charting CPU cycles and cache
//! misses per variant.
//!
//! Usage:
//!   sortsweep run                           # Full sweep with defaults
//!   sortsweep run --min 1000 --max 100000   # Smaller sweep
//!   sortsweep run --repeat 10               # More perf repeats per point
//!   sortsweep plot results.json             # Re-render charts
//!   sortsweep parse-perf stat.txt           # Extract counters from perf text

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod builder;
mod chart;
mod commands;
mod error;
mod output;
mod perf;
mod sweep;
mod toggle;
mod trace;

use sweep::SweepConfig;
use trace::SizeRange;

/// sortsweep - compare queue sort implementations under hardware counters
#[derive(Parser)]
#[command(name = "sortsweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the two-variant sweep and write results plus charts
    Run {
        /// Harness source file carrying the sort-selection macro
        #[arg(long, default_value = "queue.c")]
        source: PathBuf,

        /// Harness executable produced by the build
        #[arg(long, default_value = "./qtest")]
        target: PathBuf,

        /// Trace file fed to the harness via -f
        #[arg(long, default_value = "traces/trace-sort.cmd")]
        trace_file: PathBuf,

        /// Build tool invoked with no arguments
        #[arg(long, default_value = "make")]
        build_tool: String,

        /// Profiling tool (perf or a compatible wrapper)
        #[arg(long, default_value = "perf")]
        perf_tool: String,

        /// Smallest node count
        #[arg(long, default_value_t = 1000)]
        min: u64,

        /// Node count upper bound (excluded)
        #[arg(long, default_value_t = 500_000)]
        max: u64,

        /// Node count increment
        #[arg(long, default_value_t = 1000)]
        step: u64,

        /// perf stat --repeat count
        #[arg(long, default_value_t = 5)]
        repeat: u32,

        /// Directory for results.json and the SVG charts
        #[arg(short, long, default_value = "sweep-out")]
        out_dir: PathBuf,

        /// Measure the target as-is (no toggle, no rebuild)
        #[arg(long)]
        skip_build: bool,
    },

    /// Re-render charts from a saved results file
    Plot {
        /// results.json from a previous run
        #[arg(value_name = "FILE")]
        results: PathBuf,

        /// Directory for the SVG charts
        #[arg(short, long, default_value = "sweep-out")]
        out_dir: PathBuf,
    },

    /// Extract cycle and cache-miss counts from perf stat text
    ParsePerf {
        /// File with captured perf output (stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Run {
            source,
            target,
            trace_file,
            build_tool,
            perf_tool,
            min,
            max,
            step,
            repeat,
            out_dir,
            skip_build,
        } => SizeRange::new(min, max, step).and_then(|sizes| {
            let config = SweepConfig {
                source,
                target,
                trace_file,
                build_tool,
                perf_tool,
                sizes,
                repeat,
                skip_build,
            };
            commands::run::run(&config, &out_dir)
        }),

        Commands::Plot { results, out_dir } => commands::plot::run(&results, &out_dir),

        Commands::ParsePerf { input } => commands::parse_perf::run(input.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
