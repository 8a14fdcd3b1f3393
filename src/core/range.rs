//! Length ranges - inclusive word-length intervals used as histogram buckets
//!
//! Provides:
//! - `LengthRange`: an immutable `[min, max]` interval with value equality
//! - `parse_range_spec`: parsing of `a-b[,c[,d-e...]]` / `auto` specifications
//! - `auto_derive_ranges`: dense/sparse bucket derivation from observed data

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::core::error::WordStatsError;

/// Spec literal requesting auto-derived ranges.
pub const AUTO_SPEC: &str = "auto";

/// Above this maximum observed length, auto-derivation switches to sparse
/// mode (one bucket per distinct length) instead of materializing a bucket
/// for every integer up to the maximum.
pub const SPARSE_THRESHOLD: usize = 1000;

static RANGE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:-(\d+))?$").expect("invalid RANGE_TOKEN_RE"));

/// An inclusive interval of word character-lengths.
///
/// Equality and hashing are by value; ranges are constructed once and never
/// mutated. Overlapping ranges are legal, resolution is first-match-wins in
/// declaration order (see `WordCounter::from_tally`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LengthRange {
    pub min_len: usize,
    pub max_len: usize,
}

impl LengthRange {
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, WordStatsError> {
        if min_len > max_len {
            return Err(WordStatsError::InvertedRange {
                min: min_len,
                max: max_len,
            });
        }
        Ok(Self { min_len, max_len })
    }

    /// A range covering exactly one length.
    pub fn singleton(len: usize) -> Self {
        Self {
            min_len: len,
            max_len: len,
        }
    }

    pub fn contains(&self, length: usize) -> bool {
        self.min_len <= length && length <= self.max_len
    }

    /// Short label for chart axes: `"3"` for singletons, `"2-5"` otherwise.
    pub fn short_label(&self) -> String {
        if self.min_len == self.max_len {
            self.min_len.to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min_len, self.max_len)
    }
}

/// Parse a comma-separated range specification.
///
/// Accepts single integers (`4` means `4-4`) and inclusive pairs (`2-3`).
/// The literal `auto` yields an empty list, which downstream code treats as
/// a request for auto-derivation.
pub fn parse_range_spec(spec: &str) -> Result<Vec<LengthRange>, WordStatsError> {
    if spec.trim() == AUTO_SPEC {
        return Ok(Vec::new());
    }

    let mut ranges = Vec::new();
    for part in spec.split(',') {
        let token = part.trim();
        let caps = RANGE_TOKEN_RE
            .captures(token)
            .ok_or_else(|| WordStatsError::InvalidRangeSpec {
                spec: token.to_string(),
            })?;

        let min_len: usize = caps[1]
            .parse()
            .map_err(|_| WordStatsError::InvalidRangeSpec {
                spec: token.to_string(),
            })?;
        let max_len: usize = match caps.get(2) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| WordStatsError::InvalidRangeSpec {
                    spec: token.to_string(),
                })?,
            None => min_len,
        };

        ranges.push(LengthRange::new(min_len, max_len)?);
    }
    Ok(ranges)
}

/// Derive ranges from observed data when the user asked for `auto`.
///
/// Dense mode: one singleton per integer from 1 to the maximum observed
/// length. Sparse mode (maximum above `SPARSE_THRESHOLD`): one singleton per
/// distinct observed length only, ascending.
pub fn auto_derive_ranges(tally: &HashMap<usize, u64>) -> Vec<LengthRange> {
    let max_len = tally.keys().copied().max().unwrap_or(0);

    if max_len > SPARSE_THRESHOLD {
        let mut lengths: Vec<usize> = tally.keys().copied().collect();
        lengths.sort_unstable();
        lengths.into_iter().map(LengthRange::singleton).collect()
    } else {
        (1..=max_len).map(LengthRange::singleton).collect()
    }
}
