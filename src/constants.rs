//! Application constants for the lab converter
//!
//! This module contains the recognized file extensions, default output
//! settings, the log label pattern, and the positional HL7 field map used
//! throughout the converter.

// =============================================================================
// File Extensions and Output Defaults
// =============================================================================

/// Extensions handled by the CSV reader
pub const CSV_EXTENSIONS: &[&str] = &["csv"];

/// Extensions handled by the log extractor
pub const LOG_EXTENSIONS: &[&str] = &["log"];

/// Extensions handled by the HL7/ASTM extractor
pub const HL7_EXTENSIONS: &[&str] = &["hl7", "astm", "txt"];

/// Default output spreadsheet filename
pub const DEFAULT_OUTPUT_FILENAME: &str = "ket_qua.xlsx";

/// Default number of data rows shown in the console preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Worksheet name used in the output workbook
pub const OUTPUT_SHEET_NAME: &str = "Results";

// =============================================================================
// Log Extraction Constants
// =============================================================================

/// Pattern matching the labeled result payload on an instrument log line.
///
/// The label is either the Vietnamese "kết quả" or the English "result",
/// matched case-insensitively, followed by a colon and optional whitespace.
/// Everything after the label is captured.
pub const RESULT_LABEL_PATTERN: &str = r"(?i)(?:kết quả|result):\s*(.*)";

/// Placeholder character emitted by instruments when no data is available.
/// A capture consisting entirely of this character is dropped.
pub const PLACEHOLDER_CHAR: char = '?';

/// Separator between fields within one captured result payload
pub const LOG_FIELD_SEPARATOR: char = ',';

/// Prefix for the synthetic positional column names (Col1, Col2, ...)
pub const LOG_COLUMN_PREFIX: &str = "Col";

// =============================================================================
// HL7 Message Structure
// =============================================================================

/// Separator between messages in a concatenated HL7/ASTM stream
pub const MESSAGE_SEPARATOR: char = '\r';

/// Separator between fields within a segment
pub const FIELD_DELIMITER: char = '|';

/// Separator between components within a field
pub const COMPONENT_DELIMITER: char = '^';

/// Required length of a segment name (e.g. "PID", "OBR", "OBX")
pub const SEGMENT_NAME_LEN: usize = 3;

/// Column headers of the observation table, in output order
pub const OBSERVATION_COLUMNS: &[&str] = &["ID", "Test", "Result", "Unit", "Ref"];

// =============================================================================
// HL7 Field Map
// =============================================================================
//
// Positional indices into HL7 segments, keyed by segment type. Field and
// component numbers are 1-based, matching standard HL7 numbering (the segment
// name itself is field 0). These positions are fixed by the segment layout of
// real lab instrument output and must match exactly.

/// PID segment (patient identification) field positions
pub mod pid {
    /// Segment type name
    pub const NAME: &str = "PID";

    /// PID-3: patient/sample identifier list
    pub const IDENTIFIER_FIELD: usize = 3;

    /// Component of PID-3 carrying the bare identifier
    pub const IDENTIFIER_COMPONENT: usize = 1;
}

/// OBR segment (observation request) field positions
pub mod obr {
    /// Segment type name
    pub const NAME: &str = "OBR";

    /// OBR-4: universal service identifier
    pub const SERVICE_ID_FIELD: usize = 4;

    /// Component of OBR-4 carrying the human-readable test name,
    /// used as the fallback when an OBX carries no name of its own
    pub const SERVICE_NAME_COMPONENT: usize = 2;
}

/// OBX segment (observation result) field positions
pub mod obx {
    /// Segment type name
    pub const NAME: &str = "OBX";

    /// OBX-3: observation identifier
    pub const TEST_ID_FIELD: usize = 3;

    /// Component of OBX-3 carrying the per-observation test name
    pub const TEST_NAME_COMPONENT: usize = 2;

    /// OBX-5: observation value (required)
    pub const VALUE_FIELD: usize = 5;

    /// Component of OBX-5 carrying the result value
    pub const VALUE_COMPONENT: usize = 1;

    /// OBX-6: units
    pub const UNITS_FIELD: usize = 6;

    /// Component of OBX-6 carrying the unit text
    pub const UNITS_COMPONENT: usize = 1;

    /// OBX-7: reference range
    pub const REFERENCE_RANGE_FIELD: usize = 7;

    /// Component of OBX-7 carrying the range text
    pub const REFERENCE_RANGE_COMPONENT: usize = 1;
}
