use crate::models::Severity;

use super::keywords::{FINDING_HIGH, FINDING_LOW, SEVERITY_TIERS};

/// Overall severity: first tier (High, then Moderate, then Low) with any
/// keyword in the text. Defaults to Low.
pub fn classify_severity(text: &str) -> Severity {
    let lower = text.to_lowercase();

    SEVERITY_TIERS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(severity, _)| *severity)
        .unwrap_or(Severity::Low)
}

/// Severity of a single risk finding line, independent of the overall level.
pub fn classify_finding(line: &str) -> Severity {
    let lower = line.to_lowercase();

    if FINDING_HIGH.iter().any(|k| lower.contains(k)) {
        Severity::High
    } else if FINDING_LOW.iter().any(|k| lower.contains(k)) {
        Severity::Low
    } else {
        Severity::Moderate
    }
}
