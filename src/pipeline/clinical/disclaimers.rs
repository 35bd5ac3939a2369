use crate::models::Severity;

/// Always attached, in this order.
pub const BASELINE_DISCLAIMERS: &[&str] = &[
    "This analysis is not a medical diagnosis.",
    "The information provided is for informational purposes only.",
    "Always consult with a healthcare professional for medical advice.",
];

/// Attached only when the overall severity is High.
pub const EMERGENCY_DISCLAIMER: &str =
    "EMERGENCY WARNING: The symptoms you've described may require immediate medical attention. \
     Please contact emergency services or go to your nearest emergency room if you're \
     experiencing a medical emergency.";

pub fn disclaimers_for(severity: Severity) -> Vec<String> {
    let mut disclaimers: Vec<String> = BASELINE_DISCLAIMERS.iter().map(|d| d.to_string()).collect();
    if severity == Severity::High {
        disclaimers.push(EMERGENCY_DISCLAIMER.to_string());
    }
    disclaimers
}
