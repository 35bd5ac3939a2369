//! Nutrition-panel layout and parser switches.

use serde::{Deserialize, Serialize};

use super::LabelError;

/// One numeric column of a nutrition panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientColumn {
    Per100g,
    PerServing,
    RdaPercentage,
}

/// Label parser configuration.
///
/// `columns` gives the order in which numeric lines following a nutrient
/// name are assigned. At most `columns.len()` lines are consumed per nutrient.
/// `repair_ocr_glyphs` (off by default) repairs digit-for-letter misreads in
/// nutrient names; see [`super::glyph_repair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelParserConfig {
    pub columns: Vec<NutrientColumn>,
    pub repair_ocr_glyphs: bool,
}

impl Default for LabelParserConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                NutrientColumn::Per100g,
                NutrientColumn::PerServing,
                NutrientColumn::RdaPercentage,
            ],
            repair_ocr_glyphs: false,
        }
    }
}

impl LabelParserConfig {
    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LabelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        if self.columns.is_empty() {
            return Err(LabelError::InvalidConfig(
                "at least one nutrient column is required".into(),
            ));
        }
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].contains(column) {
                return Err(LabelError::InvalidConfig(format!(
                    "column {column:?} listed more than once"
                )));
            }
        }
        Ok(())
    }
}
