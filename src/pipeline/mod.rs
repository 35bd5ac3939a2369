pub mod sections;
pub mod label; // Packaged-food label OCR text -> LabelRecord
pub mod clinical; // Symptom message / model reply -> AnalysisRecord
