//! Caller-side options applied on top of an engine result.

use serde::{Deserialize, Serialize};

use super::result::{ValidationError, ValidationResult};
use crate::error::FormError;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Keep warnings in the result.
    #[serde(default = "default_true")]
    pub show_warnings: bool,
    /// Treat every surviving warning as an error.
    #[serde(default)]
    pub strict: bool,
    /// Codes dropped from both errors and warnings.
    #[serde(default)]
    pub suppressed_codes: Vec<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            show_warnings: true,
            strict: false,
            suppressed_codes: Vec::new(),
        }
    }
}

impl ValidationOptions {
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|e| {
            FormError::config("C001", format!("Failed to parse validation options: {}", e))
        })
    }

    fn is_suppressed(&self, code: &str) -> bool {
        self.suppressed_codes.iter().any(|c| c == code)
    }

    /// Build a new result from `result` with these options applied.
    /// Order within each list is preserved; promoted warnings follow the
    /// original errors.
    pub fn apply(&self, result: ValidationResult) -> ValidationResult {
        let (errors, warnings) = result.into_parts();

        let mut errors: Vec<ValidationError> = errors
            .into_iter()
            .filter(|e| !self.is_suppressed(e.code))
            .collect();

        let warnings = if self.show_warnings {
            warnings
                .into_iter()
                .filter(|w| !self.is_suppressed(w.code))
                .collect()
        } else {
            Vec::new()
        };

        if self.strict {
            errors.extend(warnings.into_iter().map(|w| ValidationError {
                code: w.code,
                message: w.message,
            }));
            return ValidationResult::new(errors, Vec::new());
        }

        ValidationResult::new(errors, warnings)
    }
}
