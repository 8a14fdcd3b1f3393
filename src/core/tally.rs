//! Length tally - concurrent word-length counting
//!
//! Maps every word to its character length and accumulates a length -> count
//! table. With one thread this is a plain ordered pass; with more, the word
//! slice is partitioned into contiguous near-equal chunks, each worker builds
//! a private local table, and the coordinator merges them by summing counts.
//! The merge is commutative and associative, so the result is identical for
//! any thread count.
//!
//! Progress reporting goes through a single shared atomic counter of words
//! processed so far, scoped to one tally invocation. The sink fires whenever
//! the cumulative counter crosses a multiple of `PROGRESS_STRIDE`, and always
//! once more with 100.0 at the end. Cadence under concurrency is best-effort.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Invoke the progress sink at least every this many words.
pub const PROGRESS_STRIDE: usize = 1000;

/// Side-channel receiver for progress percentages (0.0 - 100.0).
pub type ProgressSink<'a> = &'a (dyn Fn(f64) + Sync);

/// Count word lengths, concurrently when `thread_count > 1`.
///
/// Lengths are character counts, not byte counts. Empty input yields an
/// empty map.
pub fn tally_lengths(
    words: &[&str],
    thread_count: NonZeroUsize,
    progress: Option<ProgressSink>,
) -> Result<HashMap<usize, u64>> {
    let total = words.len();
    if total == 0 {
        if let Some(sink) = progress {
            sink(100.0);
        }
        return Ok(HashMap::new());
    }

    let threads = thread_count.get();
    let counts = if threads == 1 {
        tally_sequential(words, progress)
    } else {
        tally_parallel(words, threads, progress)?
    };

    if let Some(sink) = progress {
        sink(100.0);
    }
    Ok(counts)
}

fn tally_sequential(words: &[&str], progress: Option<ProgressSink>) -> HashMap<usize, u64> {
    let total = words.len();
    let mut counts = HashMap::new();

    for (idx, word) in words.iter().enumerate() {
        *counts.entry(word.chars().count()).or_insert(0) += 1;
        if idx % PROGRESS_STRIDE == 0 {
            if let Some(sink) = progress {
                sink(idx as f64 / total as f64 * 100.0);
            }
        }
    }
    counts
}

fn tally_parallel(
    words: &[&str],
    threads: usize,
    progress: Option<ProgressSink>,
) -> Result<HashMap<usize, u64>> {
    let total = words.len();
    let bounds = chunk_bounds(total, threads);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("failed to build tally thread pool")?;

    // Words-processed counter shared across workers; lives only for this
    // invocation.
    let processed = AtomicUsize::new(0);

    let merged = pool.install(|| {
        bounds
            .into_par_iter()
            .map(|(start, end)| {
                let chunk = &words[start..end];
                let mut local = HashMap::new();
                for word in chunk {
                    *local.entry(word.chars().count()).or_insert(0u64) += 1;
                }

                let done = processed.fetch_add(chunk.len(), Ordering::SeqCst) + chunk.len();
                if let Some(sink) = progress {
                    if done / PROGRESS_STRIDE > (done - chunk.len()) / PROGRESS_STRIDE {
                        sink(done as f64 / total as f64 * 100.0);
                    }
                }
                local
            })
            .reduce(HashMap::new, merge_counts)
    });

    Ok(merged)
}

/// Contiguous near-equal chunks; the last chunk absorbs the remainder of the
/// integer division.
fn chunk_bounds(total: usize, threads: usize) -> Vec<(usize, usize)> {
    let chunk_size = total / threads;
    (0..threads)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i + 1 == threads {
                total
            } else {
                (i + 1) * chunk_size
            };
            (start, end)
        })
        .collect()
}

fn merge_counts(mut acc: HashMap<usize, u64>, other: HashMap<usize, u64>) -> HashMap<usize, u64> {
    for (length, count) in other {
        *acc.entry(length).or_insert(0) += count;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn one() -> NonZeroUsize {
        NonZeroUsize::new(1).unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let counts = tally_lengths(&[], one(), None).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_sequential_counts_char_lengths() {
        let words = ["hi", "ab", "cde", "de", "a"];
        let counts = tally_lengths(&words, one(), None).unwrap();
        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(counts.get(&2), Some(&3));
        assert_eq!(counts.get(&3), Some(&1));
        assert_eq!(counts.get(&4), None);
    }

    #[test]
    fn test_lengths_are_characters_not_bytes() {
        let words = ["héllo", "日本語"];
        let counts = tally_lengths(&words, one(), None).unwrap();
        assert_eq!(counts.get(&5), Some(&1));
        assert_eq!(counts.get(&3), Some(&1));
    }

    #[test]
    fn test_thread_count_invariance() {
        let words: Vec<String> = (0..2500).map(|i| "x".repeat(i % 17 + 1)).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();

        let baseline = tally_lengths(&refs, one(), None).unwrap();
        for n in [2usize, 4, 8] {
            let counts =
                tally_lengths(&refs, NonZeroUsize::new(n).unwrap(), None).unwrap();
            assert_eq!(counts, baseline, "mismatch for {} threads", n);
        }
    }

    #[test]
    fn test_more_threads_than_words() {
        let words = ["a", "bb", "ccc"];
        let counts = tally_lengths(&words, NonZeroUsize::new(8).unwrap(), None).unwrap();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.values().sum::<u64>(), 3);
    }

    #[test]
    fn test_progress_ends_at_hundred() {
        let words = ["a"; 50];
        let seen = Mutex::new(Vec::new());
        let sink = |p: f64| seen.lock().unwrap().push(p);
        tally_lengths(&words, one(), Some(&sink)).unwrap();

        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty());
        assert_eq!(*seen.last().unwrap(), 100.0);
    }

    #[test]
    fn test_progress_ends_at_hundred_parallel() {
        let words: Vec<&str> = vec!["word"; 4000];
        let seen = Mutex::new(Vec::new());
        let sink = |p: f64| seen.lock().unwrap().push(p);
        tally_lengths(&words, NonZeroUsize::new(4).unwrap(), Some(&sink)).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen.last().unwrap(), 100.0);
    }

    #[test]
    fn test_chunk_bounds_cover_everything() {
        assert_eq!(chunk_bounds(10, 3), vec![(0, 3), (3, 6), (6, 10)]);
        assert_eq!(chunk_bounds(2, 4), vec![(0, 0), (0, 0), (0, 0), (0, 2)]);
        assert_eq!(chunk_bounds(8, 2), vec![(0, 4), (4, 8)]);
    }

    #[test]
    fn test_merge_counts_sums_per_length() {
        let a = HashMap::from([(1, 2u64), (3, 1)]);
        let b = HashMap::from([(1, 1u64), (4, 5)]);
        let merged = merge_counts(a, b);
        assert_eq!(merged, HashMap::from([(1, 3u64), (3, 1), (4, 5)]));
    }
}
