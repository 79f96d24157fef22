//! Best-effort character decoding for instrument output
//!
//! Lab instruments write logs and message dumps in whatever encoding their
//! firmware ships with. Files are read as raw bytes, the encoding is guessed,
//! and decoding is lossy: malformed sequences become replacement characters,
//! never an error.

use chardetng::EncodingDetector;
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// Read a file and decode it with a guessed character encoding
pub fn read_file_lossy(path: &Path) -> Result<String> {
    let raw = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;
    Ok(decode_lossy(&raw))
}

/// Decode raw bytes with a guessed character encoding
pub fn decode_lossy(raw: &[u8]) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    let encoding = detector.guess(None, true);
    debug!("Detected encoding: {}", encoding.name());

    let (text, _, had_errors) = encoding.decode(raw);
    if had_errors {
        debug!("Lossy decode: some byte sequences were replaced");
    }
    text.into_owned()
}
