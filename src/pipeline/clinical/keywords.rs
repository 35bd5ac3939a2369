//! Keyword tables and section rules for clinical text.
//!
//! All keywords are lower-case and matched as substrings of lower-cased text.

use crate::models::Severity;
use crate::pipeline::sections::SectionRule;

pub static SYMPTOM_KEYWORDS: &[&str] = &[
    "headache", "dizzy", "dizziness", "pain", "nausea", "fever", "cough",
    "tired", "fatigue", "ache", "sore", "throat", "chest",
];

pub static MEDICATION_KEYWORDS: &[&str] = &[
    "aspirin", "tylenol", "acetaminophen", "advil", "ibuprofen", "motrin",
    "aleve", "naproxen", "lisinopril", "lipitor", "metformin", "atorvastatin",
    "warfarin", "heparin",
];

/// Overall severity tiers, in priority order. The first tier with any hit wins.
pub static SEVERITY_TIERS: &[(Severity, &[&str])] = &[
    (Severity::High, &["high severity", "severe", "serious", "urgent", "critical"]),
    (Severity::Moderate, &["moderate severity", "mild", "medium"]),
    (Severity::Low, &["low severity", "minor"]),
];

/// Per-finding severity words. Anything else is Moderate.
pub static FINDING_HIGH: &[&str] = &["high", "severe", "serious"];
pub static FINDING_LOW: &[&str] = &["low", "minor"];

/// Recommendation priority words. Anything else is Routine.
pub static PRIORITY_URGENT: &[&str] = &["urgent", "immediately", "emergency"];
pub static PRIORITY_IMPORTANT: &[&str] = &["important", "soon", "necessary"];

const ENTITY_EXIT: &[&str] = &["risk", "recommendation", "concern"];

pub const SYMPTOM_SECTION: SectionRule = SectionRule::new(&["symptoms"], ENTITY_EXIT);
pub const MEDICATION_SECTION: SectionRule = SectionRule::new(&["medications"], ENTITY_EXIT);

pub const INTERACTION_SECTION: SectionRule = SectionRule::new(
    &["medication interaction"],
    &["recommendation", "allerg", "condition"],
);
pub const ALLERGY_SECTION: SectionRule = SectionRule::new(
    &["allergies", "allergy warning"],
    &["recommendation", "medication", "condition"],
);
pub const CONDITION_SECTION: SectionRule = SectionRule::new(
    &["conditions", "condition concern"],
    &["recommendation", "allerg", "medication"],
);

pub const RECOMMENDATION_SECTION: SectionRule =
    SectionRule::new(&["recommendation"], &["disclaimer"]);

/// A mentioned drug that interacts with something the profile already lists.
pub struct InteractionRule {
    pub mentioned: &'static [&'static str],
    pub profile_medications: &'static [&'static str],
    pub severity: Severity,
    pub description: &'static str,
}

const NSAIDS: &[&str] = &["ibuprofen", "advil", "motrin", "aleve", "naproxen"];
const BLOOD_THINNERS: &[&str] = &["warfarin", "heparin"];

pub static INTERACTION_RULES: &[InteractionRule] = &[
    InteractionRule {
        mentioned: &["aspirin"],
        profile_medications: BLOOD_THINNERS,
        severity: Severity::High,
        description: "Potential interaction between aspirin and blood thinners",
    },
    InteractionRule {
        mentioned: NSAIDS,
        profile_medications: BLOOD_THINNERS,
        severity: Severity::High,
        description: "Potential interaction between NSAID pain relievers and blood thinners",
    },
    InteractionRule {
        mentioned: NSAIDS,
        profile_medications: &["lisinopril"],
        severity: Severity::Moderate,
        description: "NSAID pain relievers may reduce the effect of lisinopril",
    },
];

/// Symptoms that may relate to a condition on record.
pub struct ConditionRule {
    pub condition: &'static str,
    pub symptoms: &'static [&'static str],
    pub severity: Severity,
    pub description: &'static str,
}

pub static CONDITION_RULES: &[ConditionRule] = &[
    ConditionRule {
        condition: "hypertension",
        symptoms: &["headache", "dizziness", "dizzy"],
        severity: Severity::Moderate,
        description: "Your symptoms may be related to your hypertension",
    },
    ConditionRule {
        condition: "diabetes",
        symptoms: &["dizzy", "dizziness", "fatigue", "tired"],
        severity: Severity::Moderate,
        description: "Your symptoms may be related to your blood sugar control",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_lower(words: &[&str]) -> bool {
        words.iter().all(|w| *w == w.to_lowercase())
    }

    #[test]
    fn keyword_tables_are_lower_case() {
        assert!(all_lower(SYMPTOM_KEYWORDS));
        assert!(all_lower(MEDICATION_KEYWORDS));
        assert!(all_lower(FINDING_HIGH) && all_lower(FINDING_LOW));
        assert!(all_lower(PRIORITY_URGENT) && all_lower(PRIORITY_IMPORTANT));
        for (_, words) in SEVERITY_TIERS {
            assert!(all_lower(words));
        }
    }

    #[test]
    fn severity_tiers_are_high_to_low() {
        let order: Vec<Severity> = SEVERITY_TIERS.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, vec![Severity::High, Severity::Moderate, Severity::Low]);
    }

    #[test]
    fn risk_sections_never_exit_on_their_own_keyword() {
        for rule in [INTERACTION_SECTION, ALLERGY_SECTION, CONDITION_SECTION] {
            for enter in rule.enter {
                assert!(!rule.exit.iter().any(|x| enter.contains(x)), "{enter}");
            }
        }
    }

    #[test]
    fn interaction_rules_reference_known_medications() {
        for rule in INTERACTION_RULES {
            for m in rule.mentioned {
                assert!(MEDICATION_KEYWORDS.contains(m), "{m}");
            }
        }
    }
}
