use crate::pipeline::sections::{collect_bullets, SectionRule};

use super::keywords::{ALLERGY_SECTION, CONDITION_SECTION, INTERACTION_SECTION};
use super::severity::classify_finding;
use super::types::{RiskAnalysis, RiskFinding};

/// Collect risk findings from the interaction, allergy and condition sections
/// of the text. Each finding is graded on its own wording.
pub fn extract_risks(text: &str) -> RiskAnalysis {
    RiskAnalysis {
        medication_interactions: findings(text, &INTERACTION_SECTION),
        allergy_warnings: findings(text, &ALLERGY_SECTION),
        condition_concerns: findings(text, &CONDITION_SECTION),
    }
}

fn findings(text: &str, section: &SectionRule) -> Vec<RiskFinding> {
    collect_bullets(text, section)
        .into_iter()
        .map(|line| RiskFinding {
            severity: classify_finding(&line),
            description: line,
        })
        .collect()
}
