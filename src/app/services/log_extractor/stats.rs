//! Extraction statistics and result structures for log scraping

use crate::app::models::ResultTable;

/// Extraction result with the normalized table and basic statistics
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// Rectangular table built from the matched lines
    pub table: ResultTable,

    /// Basic extraction statistics
    pub stats: ExtractStats,
}

/// Simple extraction statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtractStats {
    /// Total number of lines scanned
    pub lines_scanned: usize,

    /// Number of records extracted from matching lines
    pub records_extracted: usize,

    /// Number of matching lines dropped for having no usable payload
    pub lines_skipped: usize,
}

impl ExtractStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_scanned: 0,
            records_extracted: 0,
            lines_skipped: 0,
        }
    }

    /// Number of lines that matched the result label at all
    pub fn lines_matched(&self) -> usize {
        self.records_extracted + self.lines_skipped
    }
}

impl Default for ExtractStats {
    fn default() -> Self {
        Self::new()
    }
}
