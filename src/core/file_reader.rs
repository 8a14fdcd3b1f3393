//! Input reading strategy
//!
//! The analyzer consumes the whole input as one in-memory text payload.
//! Non-UTF-8 bytes are replaced via lossy conversion (the tally only cares
//! about character runs, not exact bytes), and the caller is told so it can
//! warn. Oversized files are refused up front rather than half-read.

use std::fs;
use std::io;
use std::path::Path;

/// Refuse inputs above this size (256 MB); the pipeline is not streaming.
pub const MAX_INPUT_SIZE: u64 = 256 * 1024 * 1024;

/// Result of reading an input file.
#[derive(Debug)]
pub struct InputText {
    /// The full text payload.
    pub content: String,
    /// Whether invalid UTF-8 was replaced during decoding.
    pub lossy: bool,
}

/// Read the input file fully into memory.
pub fn read_input(path: &Path) -> io::Result<InputText> {
    let size = fs::metadata(path)?.len();
    if size > MAX_INPUT_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "input file is {} bytes, larger than the {} byte limit",
                size, MAX_INPUT_SIZE
            ),
        ));
    }

    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(InputText {
            content,
            lossy: false,
        }),
        Err(err) => Ok(InputText {
            content: String::from_utf8_lossy(err.as_bytes()).into_owned(),
            lossy: true,
        }),
    }
}
