//! Structural model of one HL7 message
//!
//! A message is a list of segments, one per line; a segment is a 3-character
//! name plus `|`-separated fields; a field may carry `^`-separated components.
//! Field and component accessors are 1-based so use sites read like the HL7
//! numbering they implement (PID-3, OBX-5, ...).

use crate::constants::{COMPONENT_DELIMITER, FIELD_DELIMITER, SEGMENT_NAME_LEN};
use crate::{Error, Result};

/// One parsed HL7 message
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Segments in wire order
    pub segments: Vec<Segment>,
}

/// One named segment within a message
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Segment type name (e.g. "PID", "OBR", "OBX")
    pub name: String,

    /// Fields after the name, in wire order
    pub fields: Vec<String>,
}

impl Message {
    /// Parse one message candidate into segments
    ///
    /// Segments are separated by newlines within a candidate (the carriage
    /// return is reserved as the message separator). A segment name that is
    /// not exactly three ASCII alphanumeric characters is a structural
    /// violation.
    pub fn parse(candidate: &str) -> Result<Self> {
        let mut segments = Vec::new();

        for line in candidate.split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.split(FIELD_DELIMITER);
            let name = parts.next().unwrap_or_default().trim();
            if name.len() != SEGMENT_NAME_LEN || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::message_parse(format!(
                    "invalid segment name: '{}'",
                    name
                )));
            }

            segments.push(Segment {
                name: name.to_string(),
                fields: parts.map(|f| f.trim().to_string()).collect(),
            });
        }

        if segments.is_empty() {
            return Err(Error::message_parse("message contains no segments"));
        }

        Ok(Self { segments })
    }

    /// First segment with the given type name, if any
    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name == name)
    }

    /// All segments with the given type name, in wire order
    pub fn segments_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Segment> {
        self.segments.iter().filter(move |s| s.name == name)
    }
}

impl Segment {
    /// Field by 1-based HL7 field number (the segment name is field 0)
    pub fn field(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.fields.get(i))
            .map(String::as_str)
    }
}

/// Component of a field by 1-based HL7 component number
pub fn component(field: &str, number: usize) -> Option<&str> {
    number
        .checked_sub(1)
        .and_then(|i| field.split(COMPONENT_DELIMITER).nth(i))
}
