//! Tests for HL7 extraction

pub mod message_tests;

/// A complete single-patient message: one PID, one OBR, two OBX segments
pub fn sample_message() -> String {
    [
        "MSH|^~\\&|ANALYZER|LAB|||20240301101500||ORU^R01|42|P|2.3",
        "PID|1||P0001^^^LAB||DOE^JOHN",
        "OBR|1|||CBC^Complete Blood Count",
        "OBX|1|NM|WBC^White Blood Cells||6.1|10*9/L|4.0-10.0|N",
        "OBX|2|NM|RBC^Red Blood Cells||4.5|10*12/L|4.2-5.9|N",
    ]
    .join("\n")
}

/// A message whose single OBX carries no name of its own
pub fn message_with_unnamed_obx() -> String {
    [
        "MSH|^~\\&|ANALYZER|LAB|||20240301103000||ORU^R01|43|P|2.3",
        "PID|1||P0002^^^LAB",
        "OBR|1|||GLU^Glucose",
        "OBX|1|NM|||5.4|mmol/L|3.9-6.1",
    ]
    .join("\n")
}

/// A structurally broken candidate (segment name too long)
pub fn malformed_message() -> String {
    "GARBAGE|1|2|3".to_string()
}
