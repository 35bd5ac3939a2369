use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Priority, Severity};

/// Structured result of analysing one symptom message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// Fresh per analysis, e.g. `MED4F2A91C0`.
    pub analysis_id: String,
    pub timestamp: DateTime<Utc>,
    pub extracted_entities: ExtractedEntities,
    pub severity_level: Severity,
    pub risk_analysis: RiskAnalysis,
    /// Never empty.
    pub recommendations: Vec<Recommendation>,
    pub disclaimers: Vec<String>,
}

/// Lower-cased symptom and medication mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEntities {
    pub symptoms: BTreeSet<String>,
    pub medications: BTreeSet<String>,
}

impl ExtractedEntities {
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty() && self.medications.is_empty()
    }

    /// Any symptom entity containing `term`.
    pub fn mentions_symptom(&self, term: &str) -> bool {
        self.symptoms.iter().any(|s| s.contains(term))
    }

    /// Any medication entity containing `term`.
    pub fn mentions_medication(&self, term: &str) -> bool {
        self.medications.iter().any(|m| m.contains(term))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub medication_interactions: Vec<RiskFinding>,
    pub allergy_warnings: Vec<RiskFinding>,
    pub condition_concerns: Vec<RiskFinding>,
}

impl RiskAnalysis {
    pub fn is_empty(&self) -> bool {
        self.medication_interactions.is_empty()
            && self.allergy_warnings.is_empty()
            && self.condition_concerns.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
    pub reasoning: String,
}
