use std::collections::BTreeSet;

use crate::pipeline::sections::{collect_bullets, SectionRule};

use super::keywords::{MEDICATION_KEYWORDS, MEDICATION_SECTION, SYMPTOM_KEYWORDS, SYMPTOM_SECTION};
use super::types::ExtractedEntities;

/// Extract symptom and medication entities.
///
/// Combines closed keyword-list hits anywhere in the text with the bullet
/// items of `symptoms` / `medications` sections. All entities are lower-cased.
pub fn extract_entities(text: &str) -> ExtractedEntities {
    let lower = text.to_lowercase();

    ExtractedEntities {
        symptoms: collect(&lower, text, SYMPTOM_KEYWORDS, &SYMPTOM_SECTION),
        medications: collect(&lower, text, MEDICATION_KEYWORDS, &MEDICATION_SECTION),
    }
}

fn collect(lower: &str, text: &str, keywords: &[&str], section: &SectionRule) -> BTreeSet<String> {
    let mut found: BTreeSet<String> = keywords
        .iter()
        .filter(|k| lower.contains(*k))
        .map(|k| k.to_string())
        .collect();

    found.extend(collect_bullets(text, section).into_iter().map(|b| b.to_lowercase()));
    found
}
