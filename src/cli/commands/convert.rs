//! Conversion workflow: dispatch, extract, preview, write
//!
//! The dispatcher selects an extractor purely by the lowercase file
//! extension. An unrecognized extension fails before any file content is
//! read; an extraction that yields zero rows is reported and produces no
//! output file.

use std::path::Path;
use tracing::{debug, info, warn};

use super::shared;
use crate::app::models::ResultTable;
use crate::app::services::csv_reader;
use crate::app::services::hl7_extractor::Hl7Extractor;
use crate::app::services::log_extractor::LogExtractor;
use crate::app::services::spreadsheet_writer::SpreadsheetWriter;
use crate::app::services::text_decoder;
use crate::cli::args::Args;
use crate::constants::{CSV_EXTENSIONS, HL7_EXTENSIONS, LOG_EXTENSIONS};
use crate::{Error, Result};

/// Run the full conversion workflow for the given CLI arguments
pub fn run_convert(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;

    let config = args.to_config();
    info!("Converting {}", config.input_path.display());
    debug!("Run configuration: {:?}", config);

    let table = extract_table(&config.input_path)?;
    shared::print_preview(&table, config.preview_rows);

    if write_if_nonempty(&table, &config.output_path)? {
        shared::print_saved(&config.output_path);
    } else {
        shared::print_no_data_warning();
    }

    Ok(())
}

/// Select an extractor by file extension and produce the result table
///
/// The extension check happens before the file is opened, so an unsupported
/// format fails even for an unreadable path.
pub fn extract_table(input_path: &Path) -> Result<ResultTable> {
    let extension = input_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if CSV_EXTENSIONS.contains(&extension.as_str()) {
        csv_reader::read_csv_file(input_path)
    } else if LOG_EXTENSIONS.contains(&extension.as_str()) {
        let text = text_decoder::read_file_lossy(input_path)?;
        Ok(LogExtractor::new().extract(&text).table)
    } else if HL7_EXTENSIONS.contains(&extension.as_str()) {
        let text = text_decoder::read_file_lossy(input_path)?;
        Ok(Hl7Extractor::new().extract(&text).table)
    } else {
        Err(Error::unsupported_format(extension))
    }
}

/// Write the spreadsheet when the table has rows
///
/// Returns whether an output file was written. An empty extraction result is
/// not an error; it just produces nothing.
pub fn write_if_nonempty(table: &ResultTable, output_path: &Path) -> Result<bool> {
    if table.is_empty() {
        warn!("Extraction produced no rows; skipping output");
        return Ok(false);
    }

    SpreadsheetWriter::new(output_path).write(table)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_fails_without_reading() {
        // The path does not exist: the error must still be UnsupportedFormat,
        // proving the extension is checked before any file access.
        let result = extract_table(Path::new("/nonexistent/report.pdf"));
        assert!(matches!(
            result,
            Err(Error::UnsupportedFormat { ref extension }) if extension == "pdf"
        ));
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let result = extract_table(Path::new("/nonexistent/report"));
        assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        // .CSV dispatches to the CSV reader, which then fails on the missing
        // file rather than on the format.
        let result = extract_table(Path::new("/nonexistent/report.CSV"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
