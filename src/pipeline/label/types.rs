use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Structured content of one packaged-food label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    /// In label order; duplicates kept.
    pub ingredients: Vec<String>,
    pub allergens: BTreeSet<String>,
    /// e.g. "20 g"
    pub serving_size: Option<String>,
    /// Keyed by nutrient name as printed (case preserved).
    pub nutrition_facts: BTreeMap<String, NutrientEntry>,
    /// In order of appearance, `*` marker included.
    pub footnotes: Vec<String>,
}

/// One row of the nutrition panel.
///
/// `None` means the label printed no value (or a `-` placeholder);
/// `Some(0.0)` is a confirmed zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientEntry {
    pub unit: String,
    pub per_100g: Option<f64>,
    pub per_serving: Option<f64>,
    pub rda_percentage: Option<f64>,
    /// Sub-nutrient row, printed with a leading dash.
    pub indented: bool,
}

impl NutrientEntry {
    pub fn has_values(&self) -> bool {
        self.per_100g.is_some() || self.per_serving.is_some() || self.rda_percentage.is_some()
    }
}

impl LabelRecord {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
            && self.allergens.is_empty()
            && self.serving_size.is_none()
            && self.nutrition_facts.is_empty()
            && self.footnotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names_are_camel_case() {
        let mut record = LabelRecord {
            serving_size: Some("20 g".into()),
            ..Default::default()
        };
        record.nutrition_facts.insert(
            "Protein".into(),
            NutrientEntry {
                unit: "g".into(),
                per_100g: Some(6.4),
                per_serving: Some(0.0),
                rda_percentage: None,
                indented: false,
            },
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["servingSize"], "20 g");
        let protein = &json["nutritionFacts"]["Protein"];
        assert_eq!(protein["per100g"], 6.4);
        assert_eq!(protein["perServing"], 0.0);
        assert!(protein["rdaPercentage"].is_null());
        assert_eq!(protein["indented"], false);
    }

    #[test]
    fn absent_and_zero_survive_round_trip() {
        let entry = NutrientEntry {
            unit: "g".into(),
            per_100g: Some(0.0),
            per_serving: None,
            rda_percentage: None,
            indented: true,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: NutrientEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.per_100g, Some(0.0));
        assert_eq!(back.per_serving, None);
    }

    #[test]
    fn default_record_is_empty() {
        assert!(LabelRecord::default().is_empty());
        assert!(!NutrientEntry::default().has_values());
    }
}
