//! Run configuration for the converter.
//!
//! The original tool carried its input path and output filename as embedded
//! constants; here both are explicit parameters resolved from the CLI and
//! passed into the dispatcher.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_OUTPUT_FILENAME, DEFAULT_PREVIEW_ROWS};

/// Parameters for a single conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input file to convert
    pub input_path: PathBuf,

    /// Destination spreadsheet path
    pub output_path: PathBuf,

    /// Number of data rows shown in the console preview
    pub preview_rows: usize,
}

impl Config {
    /// Create a configuration for one input file with default output settings
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    /// Set the destination spreadsheet path
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Set the console preview length
    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("sample.log");
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_FILENAME));
        assert_eq!(config.preview_rows, DEFAULT_PREVIEW_ROWS);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new("sample.hl7")
            .with_output_path("results.xlsx")
            .with_preview_rows(10);
        assert_eq!(config.output_path, PathBuf::from("results.xlsx"));
        assert_eq!(config.preview_rows, 10);
    }
}
