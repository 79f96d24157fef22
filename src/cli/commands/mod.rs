//! Command implementations for the lab converter CLI
//!
//! The converter has a single workflow: dispatch on the input extension,
//! extract, preview, write. The workflow lives in [`convert`]; logging setup
//! and console reporting helpers are in [`shared`].

pub mod convert;
pub mod shared;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner for the lab converter
pub fn run(args: Args) -> Result<()> {
    convert::run_convert(args)
}
