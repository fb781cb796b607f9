//! `perf stat` invocation and counter extraction.

use crate::error::{CliError, Result};
use crate::output;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Hardware events requested from perf.
pub(crate) const EVENTS: &str = "cycles,cache-misses";

/// One measurement: aggregate counts over all repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PerfCounters {
    pub cycles: u64,
    pub cache_misses: u64,
}

/// Drives the harness under `perf stat` and extracts both counters.
#[derive(Debug, Clone)]
pub(crate) struct PerfRunner {
    perf_path: String,
    target: PathBuf,
    repeat: u32,
}

impl PerfRunner {
    pub(crate) fn new(perf_path: &str, target: &Path, repeat: u32) -> Self {
        Self {
            perf_path: perf_path.to_string(),
            target: target.to_path_buf(),
            repeat,
        }
    }

    /// Run `perf stat --repeat <r> -e cycles,cache-misses <target> -f <trace>`.
    pub(crate) fn measure(&self, trace: &Path) -> Result<PerfCounters> {
        let output = Command::new(&self.perf_path)
            .arg("stat")
            .arg("--repeat")
            .arg(self.repeat.to_string())
            .arg("-e")
            .arg(EVENTS)
            .arg(&self.target)
            .arg("-f")
            .arg(trace)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        if !output.status.success() {
            return Err(CliError::PerfFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: output::tail(&String::from_utf8_lossy(&output.stderr), 12),
            });
        }

        // perf prints the counter table on stderr; harness output lands on
        // stdout. Scan both, as either stream may carry event lines.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        parse_counters(&text)
    }
}

/// Extract the integer counts preceding `cycles` and `cache-misses`.
///
/// perf formats counts with `,` thousands separators; those are stripped
/// before parsing. Lines whose first token is not numeric (`<not counted>`,
/// headers) leave the counter untouched. When an event appears on more than
/// one line the later line wins. The `cache-misses` check comes first so a
/// cache-miss line never feeds the cycle counter.
pub(crate) fn parse_counters(text: &str) -> Result<PerfCounters> {
    let mut cycles = None;
    let mut cache_misses = None;

    for line in text.lines() {
        if line.contains("cache-misses") {
            if let Some(v) = leading_count(line) {
                cache_misses = Some(v);
            }
        } else if line.contains("cycles") {
            if let Some(v) = leading_count(line) {
                cycles = Some(v);
            }
        }
    }

    Ok(PerfCounters {
        cycles: cycles.ok_or(CliError::CounterMissing("cycles"))?,
        cache_misses: cache_misses.ok_or(CliError::CounterMissing("cache-misses"))?,
    })
}

fn leading_count(line: &str) -> Option<u64> {
    line.split_whitespace().next()?.replace(',', "").parse().ok()
}
