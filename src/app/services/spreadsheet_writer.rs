//! Spreadsheet sink for the result table
//!
//! Serializes a `ResultTable` to a single-worksheet Excel workbook: column
//! names on row 0, one data row per table row, `None` cells left blank, no
//! index column. Sink failures are fatal.

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::models::ResultTable;
use crate::constants::OUTPUT_SHEET_NAME;
use crate::{Error, Result};

/// Writer handing the result table to the spreadsheet file
#[derive(Debug)]
pub struct SpreadsheetWriter {
    output_path: PathBuf,
}

impl SpreadsheetWriter {
    /// Create a writer for the given output path
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
        }
    }

    /// Serialize the table and save the workbook
    pub fn write(&self, table: &ResultTable) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(OUTPUT_SHEET_NAME)
            .map_err(|e| Error::spreadsheet_write("Failed to name worksheet", Box::new(e)))?;

        for (col, name) in table.columns.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, name.as_str())
                .map_err(|e| Error::spreadsheet_write("Failed to write header row", Box::new(e)))?;
        }

        for (row_index, row) in table.rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                if let Some(value) = cell {
                    worksheet
                        .write_string((row_index + 1) as u32, col as u16, value.as_str())
                        .map_err(|e| {
                            Error::spreadsheet_write(
                                format!("Failed to write data row {}", row_index + 1),
                                Box::new(e),
                            )
                        })?;
                }
            }
        }

        workbook.save(&self.output_path).map_err(|e| {
            Error::spreadsheet_write(
                format!("Failed to save workbook {}", self.output_path.display()),
                Box::new(e),
            )
        })?;

        info!(
            "Saved {} rows to {}",
            table.row_count(),
            self.output_path.display()
        );
        Ok(())
    }
}
