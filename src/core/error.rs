//! Error taxonomy for configuration and input validation
//!
//! Everything here is fatal and reported before any processing begins.
//! Empty input is deliberately not an error anywhere in the pipeline.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordStatsError {
    /// A range token that is neither `INT` nor `INT-INT`.
    #[error("invalid range specification '{spec}': expected INT or INT-INT (e.g. 2-3,4,6-8)")]
    InvalidRangeSpec { spec: String },

    /// A range whose minimum exceeds its maximum.
    #[error("invalid range '{min}-{max}': min must not exceed max")]
    InvertedRange { min: usize, max: usize },

    /// `--delim` must be exactly one character.
    #[error("delimiter must be a single character, got '{value}'")]
    InvalidDelimiter { value: String },

    /// `--threads 0` is meaningless.
    #[error("thread count must be at least 1")]
    InvalidThreadCount,

    /// `--gui` only makes sense together with `--graph`.
    #[error("--gui requires --graph (h or v)")]
    GuiRequiresGraph,

    /// Unknown `--graph` mode.
    #[error("unknown graph mode '{value}': expected 'h' or 'v'")]
    InvalidGraphMode { value: String },

    /// Unknown `--format` value.
    #[error("unknown output format '{value}': expected 'text' or 'json'")]
    InvalidOutputFormat { value: String },
}
