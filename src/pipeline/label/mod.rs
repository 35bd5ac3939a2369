pub mod types;
pub mod config;
pub mod sanitize;
pub mod glyph_repair;
pub mod ingredients;
pub mod allergens;
pub mod serving;
pub mod nutrition;
pub mod footnotes;

pub use types::*;
pub use config::*;
pub use sanitize::*;
pub use ingredients::*;
pub use allergens::*;
pub use serving::*;
pub use nutrition::*;
pub use footnotes::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LabelError {
    #[error("Label text is empty or unusable")]
    InvalidInput,

    #[error("Invalid label parser configuration: {0}")]
    InvalidConfig(String),
}

/// Converts OCR text from a packaged-food label into a [`LabelRecord`].
///
/// Stateless apart from its configuration; one parser can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct LabelParser {
    config: LabelParserConfig,
}

impl LabelParser {
    pub fn new(config: LabelParserConfig) -> Result<Self, LabelError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse a label. Never fails: missing sections come back empty.
    pub fn parse(&self, text: &str) -> LabelRecord {
        let text = normalize_ocr_text(text);

        let record = LabelRecord {
            ingredients: extract_ingredients(&text),
            allergens: extract_allergens(&text),
            serving_size: extract_serving_size(&text),
            nutrition_facts: extract_nutrition(&text, &self.config),
            footnotes: extract_footnotes(&text),
        };

        tracing::debug!(
            ingredients = record.ingredients.len(),
            allergens = record.allergens.len(),
            nutrients = record.nutrition_facts.len(),
            footnotes = record.footnotes.len(),
            has_serving_size = record.serving_size.is_some(),
            "Parsed label"
        );
        if record.is_empty() {
            tracing::debug!("No label sections recognised");
        }

        record
    }

    /// Like [`LabelParser::parse`], but rejects empty input first.
    pub fn try_parse(&self, text: &str) -> Result<LabelRecord, LabelError> {
        validate_label_text(text)?;
        Ok(self.parse(text))
    }
}

/// Reject text with nothing to parse.
pub fn validate_label_text(text: &str) -> Result<(), LabelError> {
    if text.trim().is_empty() {
        tracing::warn!("Rejected empty label text");
        return Err(LabelError::InvalidInput);
    }
    Ok(())
}

/// Parse a label with the default three-column layout.
pub fn parse_label(text: &str) -> LabelRecord {
    LabelParser::default().parse(text)
}

/// Checked variant of [`parse_label`].
pub fn try_parse_label(text: &str) -> Result<LabelRecord, LabelError> {
    LabelParser::default().try_parse(text)
}
