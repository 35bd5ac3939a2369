use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::BmiCategory;

/// A user's medical background, loaded by the caller from its user store.
///
/// List entries are expected lower-cased; matching against them is
/// case-insensitive regardless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalProfile {
    pub age: Option<u32>,
    pub gender: Option<String>,
    /// Height in centimetres.
    pub height: Option<f64>,
    /// Current weight in kilograms.
    pub weight: Option<f64>,
    pub weight_history: Vec<WeightEntry>,
    pub allergies: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub medications: Vec<String>,
}

/// One dated weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub date: NaiveDate,
    /// Kilograms.
    pub value: f64,
}

impl MedicalProfile {
    pub fn has_allergy(&self, term: &str) -> bool {
        contains_ignore_case(&self.allergies, term)
    }

    pub fn has_condition(&self, term: &str) -> bool {
        contains_ignore_case(&self.medical_conditions, term)
    }

    pub fn takes_medication(&self, term: &str) -> bool {
        contains_ignore_case(&self.medications, term)
    }

    /// Most recent weight: the latest history entry, else `weight`.
    pub fn latest_weight(&self) -> Option<f64> {
        self.weight_history
            .iter()
            .max_by_key(|e| e.date)
            .map(|e| e.value)
            .or(self.weight)
    }

    /// Body-mass index (kg / m²), if height and weight are both known and positive.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height.filter(|h| *h > 0.0)? / 100.0;
        let weight = self.latest_weight().filter(|w| *w > 0.0)?;
        Some(weight / (height_m * height_m))
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(|bmi| match bmi {
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25.0 => BmiCategory::Normal,
            b if b < 30.0 => BmiCategory::Overweight,
            _ => BmiCategory::Obese,
        })
    }
}

fn contains_ignore_case(items: &[String], term: &str) -> bool {
    items.iter().any(|i| i.trim().eq_ignore_ascii_case(term.trim()))
}
