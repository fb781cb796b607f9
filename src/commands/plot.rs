//! Plot Command Implementation
//!
//! Re-renders the two charts from a saved results.json, so a finished sweep
//! never has to be re-run just to regenerate artifacts.

use crate::chart;
use crate::error::Result;
use crate::output;
use crate::sweep::SweepResults;
use std::path::Path;

pub(crate) fn run(results_path: &Path, out_dir: &Path) -> Result<()> {
    let results = SweepResults::load(results_path)?;

    output::kv("Results", results_path.display());
    output::kv("Series", results.series.len());

    chart::write_charts(&results, out_dir)?;
    output::success(&format!(
        "wrote {} and {}",
        out_dir.join("cycles.svg").display(),
        out_dir.join("cache-misses.svg").display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::sweep::{Measurement, VariantSeries};
    use crate::toggle::SortImpl;

    #[test]
    fn test_plot_from_saved_results() {
        let dir = tempfile::tempdir().unwrap();
        let results = SweepResults {
            repeat: 5,
            series: vec![VariantSeries {
                variant: SortImpl::ListSort,
                points: vec![Measurement {
                    size: 1000,
                    cycles: 400_000,
                    cache_misses: 800,
                }],
            }],
        };
        let json_path = dir.path().join("results.json");
        results.save(&json_path).unwrap();

        let out_dir = dir.path().join("charts");
        run(&json_path, &out_dir).unwrap();
        assert!(out_dir.join("cycles.svg").is_file());
        assert!(out_dir.join("cache-misses.svg").is_file());
    }

    #[test]
    fn test_plot_missing_results_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&dir.path().join("nope.json"), dir.path()).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
