//! SVG line charts for sweep results.
//!
//! Two charts per sweep: CPU cycles and cache misses, one polyline per
//! sort implementation. The SVG is assembled by hand; no renderer needed
//! for two axes and a pair of polylines.

use crate::error::Result;
use crate::sweep::SweepResults;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;
const MARGIN_LEFT: f64 = 95.0;
const MARGIN_RIGHT: f64 = 25.0;
const MARGIN_TOP: f64 = 45.0;
const MARGIN_BOTTOM: f64 = 55.0;
const TICKS: u32 = 4;

const PALETTE: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

/// One labeled line on a chart.
pub(crate) struct Series<'a> {
    pub label: &'a str,
    pub points: &'a [(u64, u64)],
}

/// Render a line chart. Handles empty and flat series without panicking.
pub(crate) fn render_chart(
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[Series<'_>],
) -> String {
    let xmin = all_points(series).map(|(x, _)| x).min().unwrap_or(0);
    let mut xmax = all_points(series).map(|(x, _)| x).max().unwrap_or(0);
    if xmax <= xmin {
        xmax = xmin + 1;
    }
    let ymax = all_points(series).map(|(_, y)| y).max().unwrap_or(0).max(1);

    let plot_w = f64::from(WIDTH) - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = f64::from(HEIGHT) - MARGIN_TOP - MARGIN_BOTTOM;
    let sx = |x: u64| MARGIN_LEFT + (x - xmin) as f64 / (xmax - xmin) as f64 * plot_w;
    let sy = |y: u64| MARGIN_TOP + plot_h - y as f64 / ymax as f64 * plot_h;

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\">"
    );
    svg.push_str("  <style>\n");
    svg.push_str("    text { font-family: sans-serif; font-size: 12px; fill: #333; }\n");
    svg.push_str("    .title { font-size: 16px; font-weight: bold; }\n");
    svg.push_str("    .axis { stroke: #333; stroke-width: 1; }\n");
    svg.push_str("    .grid { stroke: #ddd; stroke-width: 1; }\n");
    svg.push_str("  </style>\n");
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    // Title and axis labels
    let _ = writeln!(
        svg,
        "  <text class=\"title\" x=\"{:.0}\" y=\"24\" text-anchor=\"middle\">{}</text>",
        f64::from(WIDTH) / 2.0,
        escape(title)
    );
    let _ = writeln!(
        svg,
        "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\">{}</text>",
        MARGIN_LEFT + plot_w / 2.0,
        f64::from(HEIGHT) - 12.0,
        escape(x_label)
    );
    let _ = writeln!(
        svg,
        "  <text x=\"18\" y=\"{:.0}\" text-anchor=\"middle\" \
         transform=\"rotate(-90 18 {:.0})\">{}</text>",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0,
        escape(y_label)
    );

    // Gridlines and tick labels
    for i in 0..=TICKS {
        let frac = f64::from(i) / f64::from(TICKS);
        let x_val = xmin + ((xmax - xmin) as f64 * frac) as u64;
        let y_val = (ymax as f64 * frac) as u64;
        let px = MARGIN_LEFT + frac * plot_w;
        let py = MARGIN_TOP + plot_h - frac * plot_h;

        let _ = writeln!(
            svg,
            "  <line class=\"grid\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\"/>",
            MARGIN_LEFT,
            py,
            MARGIN_LEFT + plot_w,
            py
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\">{}</text>",
            MARGIN_LEFT - 6.0,
            py + 4.0,
            format_count(y_val)
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{}</text>",
            px,
            MARGIN_TOP + plot_h + 18.0,
            format_count(x_val)
        );
    }

    // Axes
    let _ = writeln!(
        svg,
        "  <line class=\"axis\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\"/>",
        MARGIN_LEFT,
        MARGIN_TOP,
        MARGIN_LEFT,
        MARGIN_TOP + plot_h
    );
    let _ = writeln!(
        svg,
        "  <line class=\"axis\" x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\"/>",
        MARGIN_LEFT,
        MARGIN_TOP + plot_h,
        MARGIN_LEFT + plot_w,
        MARGIN_TOP + plot_h
    );

    // Data polylines
    for (i, s) in series.iter().enumerate() {
        if s.points.is_empty() {
            continue;
        }
        let color = PALETTE[i % PALETTE.len()];
        let mut coords = String::new();
        for &(x, y) in s.points {
            let _ = write!(coords, "{:.1},{:.1} ", sx(x), sy(y));
        }
        let _ = writeln!(
            svg,
            "  <polyline fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" points=\"{}\"/>",
            color,
            coords.trim_end()
        );
    }

    // Legend, top-left inside the plot area
    for (i, s) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let ly = MARGIN_TOP + 14.0 + 18.0 * i as f64;
        let _ = writeln!(
            svg,
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" \
             stroke=\"{}\" stroke-width=\"2\"/>",
            MARGIN_LEFT + 10.0,
            ly,
            MARGIN_LEFT + 34.0,
            ly,
            color
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\">{}</text>",
            MARGIN_LEFT + 40.0,
            ly + 4.0,
            escape(s.label)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write cycles.svg and cache-misses.svg for a sweep into `out_dir`.
pub(crate) fn write_charts(results: &SweepResults, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let cycle_points: Vec<Vec<(u64, u64)>> = results
        .series
        .iter()
        .map(|s| s.points.iter().map(|p| (p.size, p.cycles)).collect())
        .collect();
    let miss_points: Vec<Vec<(u64, u64)>> = results
        .series
        .iter()
        .map(|s| s.points.iter().map(|p| (p.size, p.cache_misses)).collect())
        .collect();

    let cycle_series: Vec<Series<'_>> = results
        .series
        .iter()
        .zip(&cycle_points)
        .map(|(s, points)| Series {
            label: s.variant.label(),
            points,
        })
        .collect();
    let miss_series: Vec<Series<'_>> = results
        .series
        .iter()
        .zip(&miss_points)
        .map(|(s, points)| Series {
            label: s.variant.label(),
            points,
        })
        .collect();

    fs::write(
        out_dir.join("cycles.svg"),
        render_chart("CPU cycles", "number of nodes", "CPU cycles", &cycle_series),
    )?;
    fs::write(
        out_dir.join("cache-misses.svg"),
        render_chart(
            "cache misses",
            "number of nodes",
            "cache misses",
            &miss_series,
        ),
    )?;
    Ok(())
}

fn all_points<'a>(series: &'a [Series<'_>]) -> impl Iterator<Item = (u64, u64)> + 'a {
    series.iter().flat_map(|s| s.points.iter().copied())
}

/// Group digits with `,` separators, matching perf's own count formatting.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{Measurement, VariantSeries};
    use crate::toggle::SortImpl;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn test_render_has_one_polyline_per_series() {
        let a = [(1000, 10_000), (2000, 25_000)];
        let b = [(1000, 9_000), (2000, 21_000)];
        let svg = render_chart(
            "CPU cycles",
            "number of nodes",
            "CPU cycles",
            &[
                Series {
                    label: "merge_sort",
                    points: &a,
                },
                Series {
                    label: "list_sort",
                    points: &b,
                },
            ],
        );
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("merge_sort"));
        assert!(svg.contains("list_sort"));
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_empty_series_does_not_panic() {
        let svg = render_chart("empty", "x", "y", &[]);
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_render_single_point_does_not_panic() {
        let points = [(1000, 0)];
        let svg = render_chart(
            "flat",
            "x",
            "y",
            &[Series {
                label: "merge_sort",
                points: &points,
            }],
        );
        assert!(svg.contains("<polyline"));
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_render_escapes_labels() {
        let svg = render_chart("a < b", "x", "y", &[]);
        assert!(svg.contains("a &lt; b"));
    }

    #[test]
    fn test_write_charts_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let results = SweepResults {
            repeat: 5,
            series: vec![VariantSeries {
                variant: SortImpl::MergeSort,
                points: vec![Measurement {
                    size: 1000,
                    cycles: 500_000,
                    cache_misses: 1200,
                }],
            }],
        };
        write_charts(&results, dir.path()).unwrap();
        assert!(dir.path().join("cycles.svg").is_file());
        assert!(dir.path().join("cache-misses.svg").is_file());
    }
}
