//! CSV result export reader
//!
//! CSV files are already tabular, so this path is a verbatim pass-through:
//! the header row becomes the column set and each record becomes one row.
//! Parsing itself is delegated to the `csv` crate; structural errors are
//! fatal, unlike the best-effort extractors.

use std::path::Path;
use tracing::info;

use super::text_decoder;
use crate::app::models::ResultTable;
use crate::{Error, Result};

/// Read a CSV file into a result table, header row included
pub fn read_csv_file(path: &Path) -> Result<ResultTable> {
    let content = text_decoder::read_file_lossy(path)?;
    let table = read_csv_text(&content, &path.display().to_string())?;
    info!(
        "Read {} rows x {} columns from {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );
    Ok(table)
}

/// Parse CSV text into a result table
pub fn read_csv_text(content: &str, file: &str) -> Result<ResultTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv_parsing(file, "Failed to read CSV headers", Some(e)))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result
            .map_err(|e| Error::csv_parsing(file, "Failed to read CSV record", Some(e)))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(ResultTable::from_header_and_rows(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_header_and_rows() {
        let table = read_csv_text("ID,Value\nA,1\nB,2\n", "test.csv").unwrap();
        assert_eq!(table.columns, vec!["ID", "Value"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows[0],
            vec![Some("A".to_string()), Some("1".to_string())]
        );
        assert_eq!(
            table.rows[1],
            vec![Some("B".to_string()), Some("2".to_string())]
        );
    }

    #[test]
    fn test_empty_fields_stay_empty_strings() {
        let table = read_csv_text("a,b\n1,\n", "test.csv").unwrap();
        assert_eq!(
            table.rows[0],
            vec![Some("1".to_string()), Some("".to_string())]
        );
    }

    #[test]
    fn test_header_only_yields_zero_rows() {
        let table = read_csv_text("a,b,c\n", "test.csv").unwrap();
        assert_eq!(table.column_count(), 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_ragged_record_is_an_error() {
        let result = read_csv_text("a,b\n1,2,3\n", "test.csv");
        assert!(matches!(result, Err(Error::CsvParsing { .. })));
    }
}
