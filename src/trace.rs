//! Trace script generation and the node-count sweep range.

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;

/// Write the trace driving one run: build a queue, insert `nodes` random
/// values at the head, sort. Overwrites any previous trace at `path`.
pub(crate) fn write_trace(path: &Path, nodes: u64) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, format!("new\nih RAND {nodes}\nsort"))?;
    Ok(())
}

/// Half-open arithmetic progression of node counts: min, min+step, .. < max.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SizeRange {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl SizeRange {
    pub(crate) fn new(min: u64, max: u64, step: u64) -> Result<Self> {
        if min == 0 {
            return Err(CliError::InvalidRange("min must be at least 1".to_string()));
        }
        if step == 0 {
            return Err(CliError::InvalidRange("step must be at least 1".to_string()));
        }
        if min >= max {
            return Err(CliError::InvalidRange(format!(
                "min ({min}) must be below max ({max})"
            )));
        }
        Ok(Self { min, max, step })
    }

    pub(crate) fn iter(self) -> impl Iterator<Item = u64> {
        (self.min..self.max).step_by(self.step as usize)
    }

    /// Number of sizes the sweep will visit.
    pub(crate) fn len(self) -> usize {
        (((self.max - self.min) + self.step - 1) / self.step) as usize
    }
}
