//! Data models for lab result conversion
//!
//! This module contains the core data structures for representing extracted
//! observations and the tabular result handed to the spreadsheet sink.

use serde::{Deserialize, Serialize};

use crate::constants::{LOG_COLUMN_PREFIX, OBSERVATION_COLUMNS};

// =============================================================================
// Observation Record
// =============================================================================

/// One reported observation extracted from an HL7/ASTM message
///
/// Each OBX segment in a message yields one record. The identifier and the
/// fallback test name are shared across all observations of a message; the
/// remaining fields come from the OBX segment itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Patient/sample identifier from the PID segment
    pub id: Option<String>,

    /// Test name: the OBX's own name when present, else the OBR request name
    pub test: Option<String>,

    /// Result value (required; a message without one is skipped entirely)
    pub result: String,

    /// Unit text, when the OBX carries one
    pub unit: Option<String>,

    /// Reference range text, when the OBX carries one
    pub reference: Option<String>,
}

// =============================================================================
// Result Table
// =============================================================================

/// The rectangular in-memory table handed to the spreadsheet sink
///
/// Invariant: every row has exactly `columns.len()` cells. Missing values are
/// `None` and render as empty cells. The constructors below enforce the
/// invariant; rows are never pushed directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Ordered column names (header row of the output)
    pub columns: Vec<String>,

    /// Data rows; `None` cells render as empty
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResultTable {
    /// Create a table with no columns and no rows
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Build a rectangular table from ragged positional records
    ///
    /// Columns are named `Col1..ColN` where N is the widest record; shorter
    /// records are right-padded with `None`. No records yields the empty
    /// table (no columns at all, not zero-width rows).
    pub fn from_ragged(records: Vec<Vec<String>>) -> Self {
        let max_cols = records.iter().map(Vec::len).max().unwrap_or(0);
        if max_cols == 0 {
            return Self::empty();
        }

        let columns = (1..=max_cols)
            .map(|i| format!("{}{}", LOG_COLUMN_PREFIX, i))
            .collect();

        let rows = records
            .into_iter()
            .map(|record| {
                let mut row: Vec<Option<String>> = record.into_iter().map(Some).collect();
                row.resize(max_cols, None);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Build the fixed-schema observation table from HL7 records
    pub fn from_observations(records: Vec<ObservationRecord>) -> Self {
        if records.is_empty() {
            return Self::empty();
        }

        let columns = OBSERVATION_COLUMNS.iter().map(|c| c.to_string()).collect();

        let rows = records
            .into_iter()
            .map(|r| vec![r.id, r.test, Some(r.result), r.unit, r.reference])
            .collect();

        Self { columns, rows }
    }

    /// Build a table from an already-rectangular header and row set (CSV path)
    ///
    /// Every row is truncated or padded to the header width so the invariant
    /// holds even for a ragged source.
    pub fn from_header_and_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|record| {
                let mut row: Vec<Option<String>> = record.into_iter().map(Some).collect();
                row.truncate(width);
                row.resize(width, None);
                row
            })
            .collect();

        Self { columns, rows }
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
