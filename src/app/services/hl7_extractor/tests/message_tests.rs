//! Tests for the structural message model

use crate::Error;
use crate::app::services::hl7_extractor::message::{Message, component};
use crate::app::services::hl7_extractor::tests::sample_message;

#[test]
fn test_parse_splits_segments_and_fields() {
    let message = Message::parse(&sample_message()).unwrap();

    assert_eq!(message.segments.len(), 5);
    assert_eq!(message.segments[0].name, "MSH");
    assert_eq!(message.segments[1].name, "PID");

    let pid = message.segment("PID").unwrap();
    assert_eq!(pid.field(1), Some("1"));
    assert_eq!(pid.field(3), Some("P0001^^^LAB"));
}

#[test]
fn test_field_numbering_is_one_based() {
    let message = Message::parse("OBX|1|NM|WBC^White Blood Cells||6.1").unwrap();
    let obx = message.segment("OBX").unwrap();

    assert_eq!(obx.field(0), None);
    assert_eq!(obx.field(2), Some("NM"));
    assert_eq!(obx.field(5), Some("6.1"));
    assert_eq!(obx.field(6), None);
}

#[test]
fn test_component_numbering_is_one_based() {
    assert_eq!(component("WBC^White Blood Cells", 1), Some("WBC"));
    assert_eq!(component("WBC^White Blood Cells", 2), Some("White Blood Cells"));
    assert_eq!(component("WBC^White Blood Cells", 3), None);
    assert_eq!(component("plain", 1), Some("plain"));
    assert_eq!(component("plain", 2), None);
    assert_eq!(component("", 1), Some(""));
    assert_eq!(component("x", 0), None);
}

#[test]
fn test_segments_named_returns_all_in_order() {
    let message = Message::parse("OBX|1|NM|A||1\nOBX|2|NM|B||2").unwrap();
    let names: Vec<&str> = message
        .segments_named("OBX")
        .map(|s| s.field(3).unwrap())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_invalid_segment_name_is_rejected() {
    assert!(matches!(
        Message::parse("GARBAGE|1|2"),
        Err(Error::MessageParse { .. })
    ));
    assert!(matches!(
        Message::parse("PI|1|2"),
        Err(Error::MessageParse { .. })
    ));
    assert!(matches!(
        Message::parse("P-D|1|2"),
        Err(Error::MessageParse { .. })
    ));
}

#[test]
fn test_one_bad_segment_fails_the_whole_message() {
    let candidate = "PID|1||P0001\nXX|broken";
    assert!(Message::parse(candidate).is_err());
}

#[test]
fn test_blank_lines_within_a_candidate_are_ignored() {
    let message = Message::parse("PID|1||P0001\n\nOBX|1|NM|A||1\n").unwrap();
    assert_eq!(message.segments.len(), 2);
}
