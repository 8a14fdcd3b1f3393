//! Statistics table renderer
//!
//! Fixed 60-character layout framed by `=` borders: one row per range in
//! declaration order, an optional "Other" row, and a footer with the total
//! word count at 100.00%.

use crate::core::counter::WordCounter;
use crate::render::color::{paint, rank_buckets};
use crate::render::RenderConfig;

const TABLE_WIDTH: usize = 60;

pub fn render_table(counter: &WordCounter, cfg: &RenderConfig) -> String {
    let mut out = Vec::new();
    out.push(format!("\n{}", "=".repeat(TABLE_WIDTH)));
    out.push("Word Length Statistics".to_string());
    out.push("=".repeat(TABLE_WIDTH));
    out.push(format!(
        "{:<20} {:<15} {:<15}",
        "Length Range", "Count", "Percentage"
    ));
    out.push("-".repeat(TABLE_WIDTH));

    let buckets = counter.buckets(cfg.show_other);
    let ranks = rank_buckets(&buckets);

    for (bucket, &rank) in buckets.iter().zip(&ranks) {
        let row = format!(
            "{:<20} {:<15} {:>6.2}%",
            bucket.label,
            bucket.count,
            counter.percentage(bucket.count)
        );
        out.push(paint(&row, rank, bucket.count, cfg.colors_enabled()));
    }

    out.push("-".repeat(TABLE_WIDTH));
    out.push(format!(
        "{:<20} {:<15} 100.00%",
        "Total",
        counter.total_words()
    ));
    out.push(format!("{}\n", "=".repeat(TABLE_WIDTH)));

    out.join("\n")
}
