//! Cross-reference extracted entities against the user's medical profile.

use crate::models::{MedicalProfile, Severity};

use super::keywords::{CONDITION_RULES, INTERACTION_RULES};
use super::types::{ExtractedEntities, RiskAnalysis, RiskFinding};

/// Findings derived from the profile rather than from the text's own sections.
///
/// The profile is only read. Rules fire in table order; each rule fires at most
/// once per analysis.
pub fn cross_reference(entities: &ExtractedEntities, profile: &MedicalProfile) -> RiskAnalysis {
    RiskAnalysis {
        medication_interactions: interactions(entities, profile),
        allergy_warnings: allergy_warnings(entities, profile),
        condition_concerns: condition_concerns(entities, profile),
    }
}

fn interactions(entities: &ExtractedEntities, profile: &MedicalProfile) -> Vec<RiskFinding> {
    INTERACTION_RULES
        .iter()
        .filter(|rule| rule.mentioned.iter().any(|m| entities.mentions_medication(m)))
        .filter(|rule| rule.profile_medications.iter().any(|m| profile.takes_medication(m)))
        .map(|rule| RiskFinding {
            severity: rule.severity,
            description: rule.description.to_string(),
        })
        .collect()
}

/// A medication entity that is itself an entry of the profile's allergy list.
fn allergy_warnings(entities: &ExtractedEntities, profile: &MedicalProfile) -> Vec<RiskFinding> {
    entities
        .medications
        .iter()
        .filter(|medication| profile.has_allergy(medication))
        .map(|medication| RiskFinding {
            severity: Severity::High,
            description: format!("You are allergic to {medication}"),
        })
        .collect()
}

fn condition_concerns(entities: &ExtractedEntities, profile: &MedicalProfile) -> Vec<RiskFinding> {
    CONDITION_RULES
        .iter()
        .filter(|rule| profile.has_condition(rule.condition))
        .filter(|rule| rule.symptoms.iter().any(|s| entities.mentions_symptom(s)))
        .map(|rule| RiskFinding {
            severity: rule.severity,
            description: rule.description.to_string(),
        })
        .collect()
}
