//! Core module - the tokenize/tally/bucket pipeline
//!
//! This module provides:
//! - Length ranges and range-spec parsing
//! - Tokenization policies
//! - Sequential and parallel length tallying with progress reporting
//! - The bucketing aggregate handed to the renderers
//! - Input reading strategy
//! - The error taxonomy

pub mod counter;
pub mod error;
pub mod file_reader;
pub mod range;
pub mod tally;
pub mod tokenizer;
