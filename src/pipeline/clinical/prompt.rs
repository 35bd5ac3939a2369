use crate::models::MedicalProfile;

/// Instruction text for an upstream assistant model.
///
/// Asks for the sectioned reply layout that [`super::analyze`] parses:
/// dash bullets under symptom, medication, risk and recommendation headers.
pub const ASSISTANT_INSTRUCTIONS: &str = r#"
Based on this information, provide relevant medical insights when responding to their questions.
When they describe symptoms, analyze potential issues considering their medical history.
If you detect concerning symptoms or medication issues, include a structured analysis with:
- Extracted symptoms and medications
- Severity assessment (Low, Moderate, High)
- Potential risks including medication interactions, allergy warnings, and condition concerns
- Recommendations with priority levels

Important: Always include appropriate medical disclaimers and encourage seeking professional medical advice for serious concerns.
"#;

/// Build the system prompt carrying the user's profile.
pub fn build_system_prompt(profile: &MedicalProfile) -> String {
    let age = profile.age.map_or_else(|| "Not provided".to_string(), |a| a.to_string());
    let gender = profile.gender.as_deref().unwrap_or("Not provided");
    let height = profile
        .height
        .map_or_else(|| "Not provided".to_string(), |h| format!("{h} cm"));
    let weight = profile
        .latest_weight()
        .map_or_else(|| "Not provided".to_string(), |w| format!("{w} kg"));

    format!(
        "You are a medical assistant chatbot. Here is the user's medical profile:\n\
         Age: {age}\n\
         Gender: {gender}\n\
         Height: {height}\n\
         Weight: {weight}\n\
         Allergies: {allergies}\n\
         Medical Conditions: {conditions}\n\
         Medications: {medications}\n\
         {ASSISTANT_INSTRUCTIONS}",
        allergies = list_or(&profile.allergies, "None reported"),
        conditions = list_or(&profile.medical_conditions, "None reported"),
        medications = list_or(&profile.medications, "None"),
    )
}

fn list_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}
