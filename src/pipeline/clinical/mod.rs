pub mod types;
pub mod keywords;
pub mod entities;
pub mod severity;
pub mod risk;
pub mod profile_check;
pub mod recommendations;
pub mod disclaimers;
pub mod prompt;

pub use types::*;
pub use entities::*;
pub use severity::*;
pub use risk::*;
pub use profile_check::*;
pub use recommendations::*;
pub use disclaimers::*;
pub use prompt::*;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::MedicalProfile;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Message is empty or unusable")]
    InvalidInput,
}

pub const ANALYSIS_ID_PREFIX: &str = "MED";

/// Analyse a symptom message (or an upstream model's reply) against a profile.
///
/// Never fails; text without recognisable content yields empty entities,
/// Low severity and the default Routine recommendation. Only `analysis_id`
/// and `timestamp` differ between calls on identical input.
pub fn analyze(message: &str, profile: &MedicalProfile) -> AnalysisRecord {
    let extracted_entities = extract_entities(message);
    let severity_level = classify_severity(message);

    let mut risk_analysis = extract_risks(message);
    let profile_findings = cross_reference(&extracted_entities, profile);
    let recommendations = synthesize_recommendations(message, severity_level, &profile_findings);

    risk_analysis
        .medication_interactions
        .extend(profile_findings.medication_interactions);
    risk_analysis.allergy_warnings.extend(profile_findings.allergy_warnings);
    risk_analysis.condition_concerns.extend(profile_findings.condition_concerns);

    let record = AnalysisRecord {
        analysis_id: new_analysis_id(),
        timestamp: Utc::now(),
        disclaimers: disclaimers_for(severity_level),
        extracted_entities,
        severity_level,
        risk_analysis,
        recommendations,
    };

    tracing::debug!(
        analysis_id = %record.analysis_id,
        severity = %record.severity_level,
        symptoms = record.extracted_entities.symptoms.len(),
        medications = record.extracted_entities.medications.len(),
        interactions = record.risk_analysis.medication_interactions.len(),
        allergy_warnings = record.risk_analysis.allergy_warnings.len(),
        condition_concerns = record.risk_analysis.condition_concerns.len(),
        recommendations = record.recommendations.len(),
        "Analysed clinical text"
    );

    record
}

/// Like [`analyze`], but rejects an empty message first.
pub fn try_analyze(message: &str, profile: &MedicalProfile) -> Result<AnalysisRecord, AnalysisError> {
    validate_message(message)?;
    Ok(analyze(message, profile))
}

pub fn validate_message(message: &str) -> Result<(), AnalysisError> {
    if message.trim().is_empty() {
        tracing::warn!("Rejected empty clinical message");
        return Err(AnalysisError::InvalidInput);
    }
    Ok(())
}

/// Whether an upstream reply carries a structured analysis block worth parsing.
pub fn has_structured_analysis(reply: &str) -> bool {
    ["Medical Analysis", "Severity", "Recommendations"]
        .iter()
        .any(|marker| reply.contains(marker))
}

/// `MED` followed by 8 upper-case hex characters of a fresh v4 UUID.
pub fn new_analysis_id() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{ANALYSIS_ID_PREFIX}{}", token[..8].to_uppercase())
}
