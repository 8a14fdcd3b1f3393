//! Tokenizer - splits raw text into words under a tokenization policy
//!
//! Three policies, selected by the optional delimiter:
//! - no delimiter: maximal runs of word characters (`\b\w+\b`)
//! - space delimiter: any whitespace run separates words
//! - any other character: that character, plus newline and carriage return,
//!   separate words; segments are trimmed and empty ones discarded
//!
//! Newline and carriage return are always implicit delimiters in the literal
//! case so a multi-line file is never collapsed into one giant token when
//! the chosen delimiter happens to be absent from a line.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("invalid WORD_RE"));

/// Split `text` into words. Output order matches input order; tokens have no
/// length limit.
pub fn tokenize(text: &str, delimiter: Option<char>) -> Vec<&str> {
    match delimiter {
        None => WORD_RE.find_iter(text).map(|m| m.as_str()).collect(),
        Some(' ') => text.split_whitespace().collect(),
        Some(delim) => text
            .split(|c: char| c == delim || c == '\n' || c == '\r')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect(),
    }
}
