//! Shared components for CLI commands
//!
//! Logging setup and the console reporting helpers used by the conversion
//! workflow.

use colored::*;
use std::path::Path;

use crate::Result;
use crate::app::models::ResultTable;
use crate::cli::args::Args;

/// Set up structured logging for the conversion run
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lab_converter={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}

/// Print the first rows of the parsed table
pub fn print_preview(table: &ResultTable, preview_rows: usize) {
    println!();
    println!("{}", "Parsed data:".bright_cyan().bold());

    if table.column_count() == 0 {
        return;
    }

    println!("  {}", table.columns.join(" | ").bold());
    for row in table.rows.iter().take(preview_rows) {
        let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
        println!("  {}", cells.join(" | "));
    }
    if table.row_count() > preview_rows {
        println!("  ... ({} rows total)", table.row_count());
    }
}

/// Print the success confirmation with the output path
pub fn print_saved(output_path: &Path) {
    println!();
    println!(
        "{} {}",
        "Saved spreadsheet:".bright_green().bold(),
        output_path.display()
    );
}

/// Print the warning shown when extraction produced no rows
pub fn print_no_data_warning() {
    println!();
    println!(
        "{}",
        "No data could be read from the file.".bright_yellow().bold()
    );
}
