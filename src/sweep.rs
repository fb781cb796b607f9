//! Sweep orchestration and the measurement series model.

use crate::builder::Builder;
use crate::error::{CliError, Result};
use crate::output;
use crate::perf::PerfRunner;
use crate::toggle::{self, SortImpl};
use crate::trace::{self, SizeRange};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Counters for one node count under one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Measurement {
    pub size: u64,
    pub cycles: u64,
    pub cache_misses: u64,
}

/// All measurements for one sort implementation, in sweep order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct VariantSeries {
    pub variant: SortImpl,
    pub points: Vec<Measurement>,
}

/// The full sweep output, persisted as results.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SweepResults {
    pub repeat: u32,
    pub series: Vec<VariantSeries>,
}

impl SweepResults {
    pub(crate) fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.to_path_buf()));
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}

/// Everything the sweep needs; assembled from CLI flags.
#[derive(Debug, Clone)]
pub(crate) struct SweepConfig {
    pub source: PathBuf,
    pub target: PathBuf,
    pub trace_file: PathBuf,
    pub build_tool: String,
    pub perf_tool: String,
    pub sizes: SizeRange,
    pub repeat: u32,
    pub skip_build: bool,
}

impl SweepConfig {
    fn build_dir(&self) -> &Path {
        match self.source.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

/// Measure both variants across the size range: toggle, rebuild, then one
/// trace + perf run per node count.
pub(crate) fn run_sweep(config: &SweepConfig) -> Result<SweepResults> {
    let builder = Builder::new(&config.build_tool, config.build_dir());
    let runner = PerfRunner::new(&config.perf_tool, &config.target, config.repeat);
    let total = config.sizes.len();

    let mut series = Vec::with_capacity(SortImpl::ALL.len());
    for variant in SortImpl::ALL {
        output::section(variant.label());
        if !config.skip_build {
            toggle::select(&config.source, variant)?;
            builder.build()?;
        }

        let mut points = Vec::with_capacity(total);
        for (i, size) in config.sizes.iter().enumerate() {
            output::info(&format!("[{}/{}] {} nodes", i + 1, total, size));
            trace::write_trace(&config.trace_file, size)?;
            let counters = runner.measure(&config.trace_file)?;
            points.push(Measurement {
                size,
                cycles: counters.cycles,
                cache_misses: counters.cache_misses,
            });
        }
        series.push(VariantSeries { variant, points });
    }

    Ok(SweepResults {
        repeat: config.repeat,
        series,
    })
}
