//! WASM entry points for the browser editor.

use wasm_bindgen::prelude::*;

use crate::error::FormError;
use crate::validate::{ValidationError, ValidationOptions, ValidationResult};

/// Parse + validate a window definition JSON.
/// Returns a `ReportDto` object.
#[wasm_bindgen]
pub fn validate_window_json(json: &str) -> JsValue {
    let report = validate_window_json_inner(json, &ValidationOptions::default());
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

/// Same as `validate_window_json`, with caller options supplied as JSON.
#[wasm_bindgen]
pub fn validate_window_json_with(json: &str, options_json: &str) -> JsValue {
    let report = match ValidationOptions::from_json(options_json) {
        Ok(options) => validate_window_json_inner(json, &options),
        Err(e) => ReportDto::from_failure(e),
    };
    serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::NULL)
}

pub(crate) fn validate_window_json_inner(json: &str, options: &ValidationOptions) -> ReportDto {
    match crate::parse::parse(json) {
        Ok(window) => ReportDto::from(crate::validate::validate_with(Some(&window), options)),
        Err(e) => ReportDto::from_failure(e),
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
pub(crate) struct FindingDto {
    pub(crate) code: String,
    pub(crate) message: String,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ReportDto {
    pub(crate) valid: bool,
    pub(crate) summary: String,
    pub(crate) errors: Vec<FindingDto>,
    pub(crate) warnings: Vec<FindingDto>,
}

impl ReportDto {
    /// A document that never reached the engine reports as its one error.
    fn from_failure(e: FormError) -> Self {
        ReportDto::from(ValidationResult::new(
            vec![ValidationError {
                code: e.code,
                message: e.message,
            }],
            Vec::new(),
        ))
    }
}

impl From<ValidationResult> for ReportDto {
    fn from(result: ValidationResult) -> Self {
        ReportDto {
            valid: result.is_valid(),
            summary: result.summary(),
            errors: result
                .errors()
                .iter()
                .map(|e| FindingDto {
                    code: e.code.to_string(),
                    message: e.message.clone(),
                })
                .collect(),
            warnings: result
                .warnings()
                .iter()
                .map(|w| FindingDto {
                    code: w.code.to_string(),
                    message: w.message.clone(),
                })
                .collect(),
        }
    }
}
