//! Output formatting utilities

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress everything except errors
pub(crate) fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a section header
pub(crate) fn section(title: &str) {
    if !quiet() {
        println!("\n{}", format!("=== {title} ===").cyan().bold());
    }
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    if !quiet() {
        println!("  {}: {}", key.white().bold(), value);
    }
}

/// Print a success message
pub(crate) fn success(msg: &str) {
    if !quiet() {
        println!("{} {}", "[PASS]".green().bold(), msg);
    }
}

/// Print a warning message
#[allow(dead_code)]
pub(crate) fn warn(msg: &str) {
    if !quiet() {
        println!("{} {}", "[WARN]".yellow().bold(), msg);
    }
}

/// Print an info message
pub(crate) fn info(msg: &str) {
    if !quiet() {
        println!("{} {}", "[INFO]".blue(), msg);
    }
}

/// Last `n` lines of captured subprocess output, for error messages
pub(crate) fn tail(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_does_not_panic() {
        section("Test Section");
    }

    #[test]
    fn test_kv_does_not_panic() {
        kv("key", "value");
    }

    #[test]
    fn test_kv_with_number() {
        kv("count", 42);
    }

    #[test]
    fn test_success_does_not_panic() {
        success("operation completed");
    }

    #[test]
    fn test_warn_does_not_panic() {
        warn("something may be wrong");
    }

    #[test]
    fn test_info_does_not_panic() {
        info("informational message");
    }

    #[test]
    fn test_tail_shorter_than_limit() {
        assert_eq!(tail("a\nb", 5), "a\nb");
    }

    #[test]
    fn test_tail_truncates() {
        assert_eq!(tail("a\nb\nc\nd", 2), "c\nd");
    }

    #[test]
    fn test_tail_empty() {
        assert_eq!(tail("", 3), "");
    }
}
