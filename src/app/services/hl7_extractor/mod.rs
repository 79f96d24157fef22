//! HL7/ASTM message extractor
//!
//! Lab instruments report results as a stream of HL7-encoded messages
//! concatenated with a carriage-return separator. This module splits the
//! stream, parses each message into segments, and maps the identifier, test
//! name, result value, unit and reference range of every OBX segment into one
//! flat observation record.
//!
//! Extraction is deliberately best-effort: a message with any structural
//! violation is skipped in its entirety and never aborts its siblings.
//!
//! ## Architecture
//!
//! - [`message`] - Segment/component message model and structural parser
//! - [`extractor`] - Message stream walking and positional field mapping
//! - [`stats`] - Extraction statistics and result structure
//!
//! The positional field map itself (which field of which segment carries
//! what) lives in [`crate::constants`], keyed by segment type.

pub mod extractor;
pub mod message;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::Hl7Extractor;
pub use message::{Message, Segment};
pub use stats::{ExtractResult, ExtractStats};
