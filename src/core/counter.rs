//! Word counter - folds a length tally into ordered range buckets
//!
//! `WordCounter` owns the ordered range list (insertion order is the display
//! order), one accumulated count per range, a catch-all "other" count for
//! lengths matching no range, and the total word count. It is mutated only
//! while bucketing and read-only during rendering.
//!
//! Range/count pairs live in an ordered vector rather than a map keyed by
//! range values, so row order is explicit and equality stays value-based.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::range::{auto_derive_ranges, LengthRange};

/// Label used for the catch-all bucket.
pub const OTHER_LABEL: &str = "Other";

#[derive(Debug, Clone)]
pub struct WordCounter {
    ranges: Vec<LengthRange>,
    counts: Vec<u64>,
    other_count: u64,
    total_words: u64,
}

/// One displayable bucket: a range label or "Other", with its count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub count: u64,
}

impl WordCounter {
    pub fn new(ranges: Vec<LengthRange>) -> Self {
        let counts = vec![0; ranges.len()];
        Self {
            ranges,
            counts,
            other_count: 0,
            total_words: 0,
        }
    }

    /// Fold a length -> count tally into buckets.
    ///
    /// An empty `ranges` list requests auto-derivation from the tally. Each
    /// length is credited to the first range (in declaration order) that
    /// contains it; lengths matching no range go to the "other" counter.
    /// Every count contributes to `total_words` either way.
    pub fn from_tally(tally: &HashMap<usize, u64>, ranges: Vec<LengthRange>) -> Self {
        let ranges = if ranges.is_empty() {
            auto_derive_ranges(tally)
        } else {
            ranges
        };
        let mut counter = Self::new(ranges);

        for (&length, &count) in tally {
            counter.total_words += count;
            match counter.ranges.iter().position(|r| r.contains(length)) {
                Some(idx) => counter.counts[idx] += count,
                None => counter.other_count += count,
            }
        }
        counter
    }

    pub fn ranges(&self) -> &[LengthRange] {
        &self.ranges
    }

    pub fn other_count(&self) -> u64 {
        self.other_count
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Percentage of the total for a single bucket count; 0 when the total
    /// is 0.
    pub fn percentage(&self, count: u64) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        count as f64 / self.total_words as f64 * 100.0
    }

    /// Displayable buckets in stored range order, optionally followed by the
    /// "Other" pseudo-bucket.
    pub fn buckets(&self, show_other: bool) -> Vec<Bucket> {
        let mut buckets: Vec<Bucket> = self
            .ranges
            .iter()
            .zip(&self.counts)
            .map(|(range, &count)| Bucket {
                label: range.to_string(),
                count,
            })
            .collect();
        if show_other {
            buckets.push(Bucket {
                label: OTHER_LABEL.to_string(),
                count: self.other_count,
            });
        }
        buckets
    }

    /// Machine-readable bucket report for external chart renderers.
    pub fn report(&self, show_other: bool) -> BucketReport {
        BucketReport {
            buckets: self
                .ranges
                .iter()
                .zip(&self.counts)
                .map(|(range, &count)| ReportBucket {
                    label: range.short_label(),
                    range: Some(*range),
                    count,
                })
                .chain(show_other.then(|| ReportBucket {
                    label: OTHER_LABEL.to_string(),
                    range: None,
                    count: self.other_count,
                }))
                .collect(),
            other_count: self.other_count,
            total_words: self.total_words,
        }
    }
}

/// Bucketed counts handed to external graphical renderers.
#[derive(Debug, Clone, Serialize)]
pub struct BucketReport {
    pub buckets: Vec<ReportBucket>,
    pub other_count: u64,
    pub total_words: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportBucket {
    pub label: String,
    #[serde(flatten)]
    pub range: Option<LengthRange>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::range::parse_range_spec;

    fn tally_of(pairs: &[(usize, u64)]) -> HashMap<usize, u64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_end_to_end_bucketing() {
        // "hi ab cde de a" -> lengths 2,2,3,2,1
        let tally = tally_of(&[(1, 1), (2, 3), (3, 1)]);
        let ranges = parse_range_spec("1-1,2-3").unwrap();
        let counter = WordCounter::from_tally(&tally, ranges);

        let buckets = counter.buckets(true);
        assert_eq!(buckets[0], Bucket { label: "1-1".into(), count: 1 });
        assert_eq!(buckets[1], Bucket { label: "2-3".into(), count: 4 });
        assert_eq!(buckets[2], Bucket { label: "Other".into(), count: 0 });
        assert_eq!(counter.total_words(), 5);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let tally = tally_of(&[(3, 1)]);
        let ranges = parse_range_spec("1-3,2-5").unwrap();
        let counter = WordCounter::from_tally(&tally, ranges);

        let buckets = counter.buckets(false);
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].count, 0);
        assert_eq!(counter.other_count(), 0);
    }

    #[test]
    fn test_unmatched_lengths_go_to_other() {
        let tally = tally_of(&[(2, 4), (9, 3)]);
        let ranges = parse_range_spec("1-3").unwrap();
        let counter = WordCounter::from_tally(&tally, ranges);

        assert_eq!(counter.buckets(false)[0].count, 4);
        assert_eq!(counter.other_count(), 3);
        assert_eq!(counter.total_words(), 7);
    }

    #[test]
    fn test_conservation_invariant() {
        let tally = tally_of(&[(1, 5), (4, 2), (7, 9), (12, 1)]);
        let ranges = parse_range_spec("1-4,6-6").unwrap();
        let counter = WordCounter::from_tally(&tally, ranges);

        let bucket_sum: u64 = counter.buckets(false).iter().map(|b| b.count).sum();
        assert_eq!(counter.total_words(), bucket_sum + counter.other_count());
    }

    #[test]
    fn test_auto_ranges_from_tally() {
        let tally = tally_of(&[(2, 1), (4, 1)]);
        let counter = WordCounter::from_tally(&tally, Vec::new());

        // Dense mode: singletons 1..=4.
        assert_eq!(counter.ranges().len(), 4);
        assert_eq!(counter.other_count(), 0);
        assert_eq!(counter.total_words(), 2);
    }

    #[test]
    fn test_empty_tally() {
        let counter = WordCounter::from_tally(&HashMap::new(), Vec::new());
        assert!(counter.ranges().is_empty());
        assert_eq!(counter.total_words(), 0);
        assert_eq!(counter.percentage(0), 0.0);
        assert!(counter.buckets(false).is_empty());
    }

    #[test]
    fn test_percentage() {
        let tally = tally_of(&[(2, 3), (5, 1)]);
        let counter = WordCounter::from_tally(&tally, parse_range_spec("1-9").unwrap());
        assert_eq!(counter.percentage(3), 75.0);
    }

    #[test]
    fn test_report_shape() {
        let tally = tally_of(&[(2, 2), (8, 1)]);
        let ranges = parse_range_spec("2,4-6").unwrap();
        let counter = WordCounter::from_tally(&tally, ranges);
        let report = counter.report(true);

        assert_eq!(report.total_words, 3);
        assert_eq!(report.other_count, 1);
        assert_eq!(report.buckets.len(), 3);
        assert_eq!(report.buckets[0].label, "2");
        assert_eq!(report.buckets[1].label, "4-6");
        assert_eq!(report.buckets[2].label, "Other");
        assert_eq!(report.buckets[2].count, 1);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_words\":3"));
        assert!(json.contains("\"min_len\":4"));
    }
}
