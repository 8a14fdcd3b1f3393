//! ASCII bar chart renderers
//!
//! Horizontal: one solid-block bar per bucket, scaled to the terminal width
//! minus the label/count columns. Vertical: bucket columns of two-character
//! blocks drawn top row first, with a dashed baseline and truncated labels
//! beneath. Both adapt to the terminal size supplied in the render config
//! and render empty bars when there are no words at all.

use crate::core::counter::{Bucket, WordCounter};
use crate::render::color::{paint, rank_buckets};
use crate::render::RenderConfig;

const BAR_BLOCK: &str = "█";

/// Columns reserved for the label and count in the horizontal layout.
const H_LABEL_COLS: usize = 45;

const V_FRAME_WIDTH: usize = 50;

/// Fraction of the remaining terminal height given to the vertical chart.
const V_HEIGHT_RATIO: f64 = 0.6;

pub fn render_horizontal(counter: &WordCounter, cfg: &RenderConfig) -> String {
    let term_width = cfg.term_size.0 as usize;
    let max_bar_width = term_width.saturating_sub(H_LABEL_COLS);

    let buckets = counter.buckets(cfg.show_other);
    let ranks = rank_buckets(&buckets);
    let max_count = max_count(&buckets);

    let mut out = Vec::new();
    out.push(format!("\n{}", "=".repeat(term_width)));
    out.push("Horizontal Bar Graph".to_string());
    out.push("=".repeat(term_width));
    out.push(format!(
        "{:<15} {:<10} {:<width$}",
        "Length Range",
        "Count",
        "Bar",
        width = max_bar_width
    ));
    out.push("-".repeat(term_width));

    for (bucket, &rank) in buckets.iter().zip(&ranks) {
        let bar_len = if max_count > 0 {
            (bucket.count as f64 / max_count as f64 * max_bar_width as f64) as usize
        } else {
            0
        };
        let bar = BAR_BLOCK.repeat(bar_len);
        let row = format!(
            "{:<15} {:<10} {:<width$}",
            bucket.label,
            bucket.count,
            bar,
            width = max_bar_width
        );
        out.push(paint(&row, rank, bucket.count, cfg.colors_enabled()));
    }

    out.push(format!("{}\n", "=".repeat(term_width)));
    out.join("\n")
}

pub fn render_vertical(counter: &WordCounter, cfg: &RenderConfig) -> String {
    let term_height = cfg.term_size.1 as usize;
    let max_chart_height = (term_height.saturating_sub(10) as f64 * V_HEIGHT_RATIO) as usize;

    let buckets = counter.buckets(cfg.show_other);
    let ranks = rank_buckets(&buckets);
    let max_count = max_count(&buckets);
    let chart_height = max_chart_height.min(max_count as usize);

    // Nonzero buckets always get at least one block row; zero-count buckets
    // stay empty.
    let bar_heights: Vec<usize> = buckets
        .iter()
        .map(|b| {
            if b.count == 0 || max_count == 0 {
                0
            } else {
                ((b.count as f64 / max_count as f64 * chart_height as f64) as usize).max(1)
            }
        })
        .collect();

    let mut out = Vec::new();
    out.push(format!("\n{}", "=".repeat(V_FRAME_WIDTH)));
    out.push("Vertical Bar Graph".to_string());
    out.push("=".repeat(V_FRAME_WIDTH));

    let top = bar_heights.iter().copied().max().unwrap_or(0);
    for level in (1..=top).rev() {
        let row: Vec<String> = buckets
            .iter()
            .zip(&bar_heights)
            .zip(&ranks)
            .map(|((bucket, &height), &rank)| {
                if height >= level {
                    paint("██", rank, bucket.count, cfg.colors_enabled())
                } else {
                    "  ".to_string()
                }
            })
            .collect();
        out.push(format!("  {}", row.join(" ")));
    }

    if !buckets.is_empty() {
        let baseline: Vec<&str> = buckets.iter().map(|_| "--").collect();
        out.push(format!("  {}", baseline.join("-")));

        let labels: Vec<String> = buckets
            .iter()
            .map(|b| format!("{:<2}", truncate_label(&b.label)))
            .collect();
        out.push(format!("  {}", labels.join(" ")));
    }

    out.push(format!("{}\n", "=".repeat(V_FRAME_WIDTH)));
    out.join("\n")
}

fn max_count(buckets: &[Bucket]) -> u64 {
    buckets.iter().map(|b| b.count).max().unwrap_or(0)
}

fn truncate_label(label: &str) -> String {
    label.chars().take(2).collect()
}
