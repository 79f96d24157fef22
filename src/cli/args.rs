//! Command-line argument definitions for the lab converter
//!
//! The converter is a one-shot tool: one input file in, one spreadsheet out.
//! Input and output paths are explicit arguments here and flow into the
//! dispatcher as configuration, never as embedded constants.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{DEFAULT_OUTPUT_FILENAME, DEFAULT_PREVIEW_ROWS};

/// CLI arguments for the lab result converter
///
/// Converts a single laboratory result file (CSV export, free-text
/// instrument log, or HL7/ASTM message stream) into an Excel spreadsheet.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lab-converter",
    version,
    about = "Convert laboratory result files (CSV, instrument logs, HL7/ASTM) into a spreadsheet",
    long_about = "A one-shot converter for laboratory result files. The input format is selected \
                  by file extension: .csv is read verbatim, .log is scraped for labeled result \
                  lines, and .hl7/.astm/.txt are parsed as HL7-encoded message streams. The \
                  resulting table is previewed on the console and written to an Excel file."
)]
pub struct Args {
    /// Input laboratory result file (.csv, .log, .hl7, .astm or .txt)
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output spreadsheet path
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_FILENAME,
        help = "Output spreadsheet path"
    )]
    pub output_path: PathBuf,

    /// Number of data rows shown in the console preview
    #[arg(
        long = "preview-rows",
        value_name = "N",
        default_value_t = DEFAULT_PREVIEW_ROWS,
        help = "Number of data rows shown in the console preview"
    )]
    pub preview_rows: usize,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Resolve the tracing log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> Config {
        Config::new(&self.input_path)
            .with_output_path(&self.output_path)
            .with_preview_rows(self.preview_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lab-converter", "sample.log"]);
        assert_eq!(args.input_path, PathBuf::from("sample.log"));
        assert_eq!(args.output_path, PathBuf::from(DEFAULT_OUTPUT_FILENAME));
        assert_eq!(args.preview_rows, DEFAULT_PREVIEW_ROWS);
        assert_eq!(args.get_log_level(), "info");
    }

    #[test]
    fn test_output_override() {
        let args = Args::parse_from(["lab-converter", "in.hl7", "-o", "results.xlsx"]);
        assert_eq!(args.output_path, PathBuf::from("results.xlsx"));
    }

    #[test]
    fn test_verbosity_flags() {
        let verbose = Args::parse_from(["lab-converter", "in.csv", "-v"]);
        assert_eq!(verbose.get_log_level(), "debug");

        let quiet = Args::parse_from(["lab-converter", "in.csv", "-q"]);
        assert_eq!(quiet.get_log_level(), "error");

        assert!(Args::try_parse_from(["lab-converter", "in.csv", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_config_carries_all_parameters() {
        let args = Args::parse_from([
            "lab-converter",
            "in.log",
            "-o",
            "out.xlsx",
            "--preview-rows",
            "3",
        ]);
        let config = args.to_config();
        assert_eq!(config.input_path, PathBuf::from("in.log"));
        assert_eq!(config.output_path, PathBuf::from("out.xlsx"));
        assert_eq!(config.preview_rows, 3);
    }
}
