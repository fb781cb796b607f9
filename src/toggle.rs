//! Build-time sort selection in the harness source.
//!
//! The harness chooses its sort implementation through a `#define lsort`
//! macro in `queue.c`; flipping it and rebuilding swaps the algorithm under
//! test without touching anything else.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// The two sort implementations the harness can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SortImpl {
    MergeSort,
    ListSort,
}

impl SortImpl {
    pub(crate) const ALL: [SortImpl; 2] = [SortImpl::MergeSort, SortImpl::ListSort];

    /// The exact macro line selecting this implementation.
    pub(crate) fn macro_line(self) -> &'static str {
        match self {
            SortImpl::MergeSort => "#define lsort 0",
            SortImpl::ListSort => "#define lsort 1",
        }
    }

    pub(crate) fn other(self) -> SortImpl {
        match self {
            SortImpl::MergeSort => SortImpl::ListSort,
            SortImpl::ListSort => SortImpl::MergeSort,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SortImpl::MergeSort => "merge_sort",
            SortImpl::ListSort => "list_sort",
        }
    }
}

impl fmt::Display for SortImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rewrite the macro line in `source` so the next build uses `variant`.
///
/// The file is left untouched when it already selects `variant`. Substring
/// replacement, matching the macro line exactly.
pub(crate) fn select(source: &Path, variant: SortImpl) -> Result<()> {
    if !source.is_file() {
        return Err(CliError::FileNotFound(source.to_path_buf()));
    }

    let text = fs::read_to_string(source)?;
    if text.contains(variant.macro_line()) {
        return Ok(());
    }

    let current = variant.other().macro_line();
    if !text.contains(current) {
        return Err(CliError::ToggleNotFound(source.to_path_buf()));
    }

    fs::write(source, text.replace(current, variant.macro_line()))?;
    Ok(())
}
