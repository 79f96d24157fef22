//! Heuristic extractor for free-text instrument logs
//!
//! Analyzers append one line per measurement to a rolling log; only lines
//! carrying a labeled result payload are of interest. This module scrapes
//! those lines and normalizes the ragged comma-separated payloads into a
//! rectangular table.
//!
//! ## Architecture
//!
//! - [`extractor`] - Line scanning, payload capture and field splitting
//! - [`stats`] - Extraction statistics and result structure
//!
//! ## Usage
//!
//! ```rust
//! use lab_converter::app::services::log_extractor::LogExtractor;
//!
//! let extractor = LogExtractor::new();
//! let result = extractor.extract("2024-01-02 kết quả: 5.2, 3.1\n");
//! assert_eq!(result.table.row_count(), 1);
//! ```

pub mod extractor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::LogExtractor;
pub use stats::{ExtractResult, ExtractStats};
