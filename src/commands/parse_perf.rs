//! Parse-Perf Command Implementation
//!
//! Extracts the two counters from captured `perf stat` text, from a file or
//! stdin. Debug aid for checking the extraction against a real perf run.

use crate::error::{CliError, Result};
use crate::output;
use crate::perf;
use std::io::Read as _;
use std::path::Path;

pub(crate) fn run(input: Option<&Path>) -> Result<()> {
    let text = match input {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let counters = perf::parse_counters(&text)?;
    output::kv("cycles", counters.cycles);
    output::kv("cache-misses", counters.cache_misses);
    Ok(())
}
