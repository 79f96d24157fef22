//! Extraction statistics and result structures for HL7 processing

use crate::app::models::ResultTable;

/// Extraction result with the observation table and basic statistics
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// Flat observation table (ID, Test, Result, Unit, Ref)
    pub table: ResultTable,

    /// Basic extraction statistics
    pub stats: ExtractStats,
}

/// Simple extraction statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtractStats {
    /// Total number of non-blank message candidates encountered
    pub messages_total: usize,

    /// Number of messages skipped due to structural violations
    pub messages_skipped: usize,

    /// Number of observation records extracted
    pub observations_extracted: usize,

    /// List of per-message failures for debugging
    pub errors: Vec<String>,
}

impl ExtractStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            messages_total: 0,
            messages_skipped: 0,
            observations_extracted: 0,
            errors: Vec::new(),
        }
    }

    /// Number of messages that parsed successfully
    pub fn messages_parsed(&self) -> usize {
        self.messages_total - self.messages_skipped
    }
}

impl Default for ExtractStats {
    fn default() -> Self {
        Self::new()
    }
}
