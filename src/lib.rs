//! Lab Converter Library
//!
//! A Rust library for converting laboratory result files into a single
//! tabular spreadsheet output.
//!
//! This library provides tools for:
//! - Extracting labeled result lines from free-text instrument logs
//! - Parsing HL7/ASTM message streams into flat observation records
//! - Reading CSV result exports verbatim
//! - Writing the resulting table to an Excel spreadsheet
//! - Best-effort character-encoding detection for instrument output

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_reader;
        pub mod hl7_extractor;
        pub mod log_extractor;
        pub mod spreadsheet_writer;
        pub mod text_decoder;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ObservationRecord, ResultTable};
pub use config::Config;

/// Result type alias for lab converter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for lab file conversion
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not in the recognized set
    #[error("Unsupported file format: '{extension}' (expected .csv, .log, .hl7, .astm or .txt)")]
    UnsupportedFormat { extension: String },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Structural violation inside a single HL7 message
    ///
    /// Raised per message and caught by the extractor loop; one malformed
    /// message never aborts the rest of the file.
    #[error("HL7 message parse failure: {message}")]
    MessageParse { message: String },

    /// Spreadsheet serialization error
    #[error("Spreadsheet writing error: {message}")]
    SpreadsheetWrite {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an HL7 message parse failure
    pub fn message_parse(message: impl Into<String>) -> Self {
        Self::MessageParse {
            message: message.into(),
        }
    }

    /// Create a spreadsheet writing error
    pub fn spreadsheet_write(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::SpreadsheetWrite {
            message: message.into(),
            source,
        }
    }
}
