//! Rank-based color assignment
//!
//! Buckets are ranked by descending count; rank 0 (the highest count) gets
//! the most prominent palette entry. Ties keep their original bucket order,
//! which is the documented tie-break: equal-count buckets are colored in the
//! order they were declared. Numeric output never depends on ranking.

use colored::{Color, Colorize};

use crate::core::counter::Bucket;

/// Palette from most to least prominent. Ranks beyond the last entry clamp
/// to white.
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::White,
];

/// Compute the 0-based rank of each bucket (indexed by original position).
pub fn rank_buckets(buckets: &[Bucket]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..buckets.len()).collect();
    // Stable sort: ties retain original bucket order.
    order.sort_by(|&a, &b| buckets[b].count.cmp(&buckets[a].count));

    let mut ranks = vec![0; buckets.len()];
    for (rank, &idx) in order.iter().enumerate() {
        ranks[idx] = rank;
    }
    ranks
}

pub fn palette_color(rank: usize) -> Color {
    PALETTE[rank.min(PALETTE.len() - 1)]
}

/// Apply the rank color to `text` when coloring is enabled and the bucket
/// has a nonzero count. Zero-count buckets are never colored.
pub fn paint(text: &str, rank: usize, count: u64, colors_enabled: bool) -> String {
    if colors_enabled && count > 0 {
        text.color(palette_color(rank)).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(label: &str, count: u64) -> Bucket {
        Bucket {
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn test_rank_by_descending_count() {
        let buckets = vec![bucket("a", 1), bucket("b", 9), bucket("c", 4)];
        assert_eq!(rank_buckets(&buckets), vec![2, 0, 1]);
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        let buckets = vec![bucket("a", 5), bucket("b", 5), bucket("c", 7)];
        // c is rank 0; a precedes b among the tied pair.
        assert_eq!(rank_buckets(&buckets), vec![1, 2, 0]);
    }

    #[test]
    fn test_palette_order_and_clamp() {
        assert_eq!(palette_color(0), Color::Red);
        assert_eq!(palette_color(1), Color::Yellow);
        assert_eq!(palette_color(5), Color::White);
        assert_eq!(palette_color(6), Color::White);
        assert_eq!(palette_color(100), Color::White);
    }

    #[test]
    fn test_zero_count_never_painted() {
        let painted = paint("0-0", 0, 0, true);
        assert_eq!(painted, "0-0");
    }

    #[test]
    fn test_paint_disabled_returns_plain() {
        let painted = paint("2-3", 0, 42, false);
        assert_eq!(painted, "2-3");
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_buckets(&[]).is_empty());
    }
}
