use crate::models::{Priority, Severity};
use crate::pipeline::sections::collect_bullets;

use super::keywords::{PRIORITY_IMPORTANT, PRIORITY_URGENT, RECOMMENDATION_SECTION};
use super::types::{Recommendation, RiskAnalysis};

pub const FALLBACK_REASONING: &str = "Based on your medical profile and symptoms.";

pub const DEFAULT_ACTION: &str = "Continue monitoring your symptoms";
pub const DEFAULT_REASONING: &str =
    "Your symptoms don't appear to require immediate attention based on the information provided.";

const URGENT_ACTION: &str = "Seek immediate medical attention";
const URGENT_REASONING: &str = "Your symptoms may require urgent care";

const REVIEW_ACTION: &str = "Review your medications with your healthcare provider";
const REVIEW_REASONING: &str = "Potential medication issues were detected";

/// Parse the bullet items of the recommendations section.
pub fn extract_recommendations(text: &str) -> Vec<Recommendation> {
    collect_bullets(text, &RECOMMENDATION_SECTION)
        .iter()
        .map(|line| parse_recommendation(line))
        .collect()
}

/// Build the final, never-empty recommendation list.
///
/// Starts from the text's own recommendations. A High severity without any
/// Urgent item gets an urgent-care item first; medication or allergy findings
/// from the profile add a medication review. Falls back to a single Routine
/// monitoring item.
pub fn synthesize_recommendations(
    text: &str,
    severity: Severity,
    profile_findings: &RiskAnalysis,
) -> Vec<Recommendation> {
    let mut recommendations = extract_recommendations(text);

    if severity == Severity::High && !recommendations.iter().any(|r| r.priority == Priority::Urgent) {
        recommendations.insert(0, fixed(Priority::Urgent, URGENT_ACTION, URGENT_REASONING));
    }

    if !profile_findings.medication_interactions.is_empty()
        || !profile_findings.allergy_warnings.is_empty()
    {
        recommendations.push(fixed(Priority::Important, REVIEW_ACTION, REVIEW_REASONING));
    }

    if recommendations.is_empty() {
        recommendations.push(default_recommendation());
    }

    recommendations
}

pub fn default_recommendation() -> Recommendation {
    fixed(Priority::Routine, DEFAULT_ACTION, DEFAULT_REASONING)
}

fn fixed(priority: Priority, action: &str, reasoning: &str) -> Recommendation {
    Recommendation {
        priority,
        action: action.to_string(),
        reasoning: reasoning.to_string(),
    }
}

/// Classify and split one recommendation line.
///
/// Separators are tried in order `:`, ` - `, ` because `; only the first
/// occurrence splits. The `because` clause keeps its leading word.
pub fn parse_recommendation(line: &str) -> Recommendation {
    let (action, reasoning) = if let Some((a, r)) = line.split_once(':') {
        (a, r.to_string())
    } else if let Some((a, r)) = line.split_once(" - ") {
        (a, r.to_string())
    } else if let Some((a, r)) = line.split_once(" because ") {
        (a, format!("because {r}"))
    } else {
        (line, String::new())
    };

    let reasoning = reasoning.trim();
    Recommendation {
        priority: classify_priority(line),
        action: action.trim().to_string(),
        reasoning: if reasoning.is_empty() {
            FALLBACK_REASONING.to_string()
        } else {
            reasoning.to_string()
        },
    }
}

/// Urgent, then Important; anything else is Routine.
pub fn classify_priority(line: &str) -> Priority {
    let lower = line.to_lowercase();

    if PRIORITY_URGENT.iter().any(|k| lower.contains(k)) {
        Priority::Urgent
    } else if PRIORITY_IMPORTANT.iter().any(|k| lower.contains(k)) {
        Priority::Important
    } else {
        Priority::Routine
    }
}
