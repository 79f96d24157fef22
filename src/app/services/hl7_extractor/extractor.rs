//! Core HL7 extraction implementation
//!
//! Walks the message stream, parses each candidate, and maps segment fields
//! into observation records through the positional field map in
//! [`crate::constants`].

use tracing::{debug, info};

use super::message::{Message, component};
use super::stats::{ExtractResult, ExtractStats};
use crate::app::models::{ObservationRecord, ResultTable};
use crate::constants::{MESSAGE_SEPARATOR, obr, obx, pid};
use crate::{Error, Result};

/// Extractor for HL7/ASTM message streams
#[derive(Debug, Default)]
pub struct Hl7Extractor;

impl Hl7Extractor {
    /// Create a new HL7 extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract observation records from a decoded message stream
    ///
    /// The stream is split on the carriage-return message separator. Each
    /// candidate is parsed independently; a candidate with any structural
    /// violation contributes zero records and is skipped silently, so one
    /// malformed message never affects its siblings.
    pub fn extract(&self, text: &str) -> ExtractResult {
        let mut stats = ExtractStats::new();
        let mut records = Vec::new();

        for candidate in text.trim().split(MESSAGE_SEPARATOR) {
            if candidate.trim().is_empty() {
                continue;
            }
            stats.messages_total += 1;

            match extract_message(candidate) {
                Ok(mut message_records) => {
                    stats.observations_extracted += message_records.len();
                    records.append(&mut message_records);
                }
                Err(e) => {
                    stats.messages_skipped += 1;
                    stats
                        .errors
                        .push(format!("Message {}: {}", stats.messages_total, e));
                    debug!("Skipped message {}: {}", stats.messages_total, e);
                }
            }
        }

        info!(
            "Extracted {} observations from {} messages ({} skipped)",
            stats.observations_extracted,
            stats.messages_total,
            stats.messages_skipped
        );

        ExtractResult {
            table: ResultTable::from_observations(records),
            stats,
        }
    }
}

/// Map one parsed message into observation records, one per OBX segment
///
/// Any error here classifies the whole message as a parse failure: no partial
/// records are emitted even when earlier OBX segments were well-formed.
fn extract_message(candidate: &str) -> Result<Vec<ObservationRecord>> {
    let message = Message::parse(candidate)?;

    let id = message
        .segment(pid::NAME)
        .and_then(|seg| seg.field(pid::IDENTIFIER_FIELD))
        .and_then(|field| component(field, pid::IDENTIFIER_COMPONENT))
        .map(str::to_string);

    let fallback_test = message
        .segment(obr::NAME)
        .and_then(|seg| seg.field(obr::SERVICE_ID_FIELD))
        .and_then(|field| component(field, obr::SERVICE_NAME_COMPONENT))
        .map(str::to_string);

    let mut records = Vec::new();
    for observation in message.segments_named(obx::NAME) {
        let result = observation
            .field(obx::VALUE_FIELD)
            .and_then(|field| component(field, obx::VALUE_COMPONENT))
            .ok_or_else(|| {
                Error::message_parse("OBX segment missing required result value (OBX-5)")
            })?
            .to_string();

        let unit = observation
            .field(obx::UNITS_FIELD)
            .and_then(|field| component(field, obx::UNITS_COMPONENT))
            .map(str::to_string);

        let reference = observation
            .field(obx::REFERENCE_RANGE_FIELD)
            .and_then(|field| component(field, obx::REFERENCE_RANGE_COMPONENT))
            .map(str::to_string);

        let test = observation
            .field(obx::TEST_ID_FIELD)
            .and_then(|field| component(field, obx::TEST_NAME_COMPONENT))
            .map(str::to_string)
            .or_else(|| fallback_test.clone());

        records.push(ObservationRecord {
            id: id.clone(),
            test,
            result,
            unit,
            reference,
        });
    }

    Ok(records)
}
