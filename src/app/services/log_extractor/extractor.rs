//! Core log extraction implementation
//!
//! Scans decoded log text line by line, captures everything after the result
//! label, and splits the payload on commas into positional fields.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

use super::stats::{ExtractResult, ExtractStats};
use crate::app::models::ResultTable;
use crate::constants::{LOG_FIELD_SEPARATOR, PLACEHOLDER_CHAR, RESULT_LABEL_PATTERN};

static RESULT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RESULT_LABEL_PATTERN).expect("invalid result label pattern"));

/// Extractor for labeled result lines in free-text instrument logs
#[derive(Debug, Default)]
pub struct LogExtractor;

impl LogExtractor {
    /// Create a new log extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract all labeled result lines from decoded log text
    ///
    /// Lines that match the label but carry no usable payload (empty, or
    /// nothing but `?` placeholders) are dropped, not emitted as blank rows.
    /// Extraction itself cannot fail; an unmatched input simply yields an
    /// empty table.
    pub fn extract(&self, text: &str) -> ExtractResult {
        let mut stats = ExtractStats::new();
        let mut records: Vec<Vec<String>> = Vec::new();

        for line in text.lines() {
            stats.lines_scanned += 1;

            let Some(captures) = RESULT_LABEL.captures(line) else {
                continue;
            };
            let payload = captures
                .get(1)
                .map(|m| m.as_str().trim())
                .unwrap_or_default();

            if payload.is_empty() || payload.chars().all(|c| c == PLACEHOLDER_CHAR) {
                stats.lines_skipped += 1;
                debug!("Skipped line {}: no usable payload", stats.lines_scanned);
                continue;
            }

            let fields = payload
                .split(LOG_FIELD_SEPARATOR)
                .map(|f| f.trim().to_string())
                .collect();
            records.push(fields);
            stats.records_extracted += 1;
        }

        info!(
            "Extracted {} records from {} lines ({} matching lines skipped)",
            stats.records_extracted, stats.lines_scanned, stats.lines_skipped
        );

        ExtractResult {
            table: ResultTable::from_ragged(records),
            stats,
        }
    }
}
