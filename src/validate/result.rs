//! Finding types and the aggregate result of one validation run.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Everything one run found, in the order the checks ran.
///
/// A result is valid exactly when it holds no errors; warnings never
/// affect validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn new(errors: Vec<ValidationError>, warnings: Vec<ValidationWarning>) -> Self {
        ValidationResult { errors, warnings }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn has_error(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    pub fn error_codes(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.code).collect()
    }

    pub fn warning_codes(&self) -> Vec<&'static str> {
        self.warnings.iter().map(|w| w.code).collect()
    }

    /// One-line summary: `Valid`, `Valid with N warning(s)`, or
    /// `E error(s)[, W warning(s)]`.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid with {} warning(s)", self.warnings.len())
            }
        } else if self.warnings.is_empty() {
            format!("{} error(s)", self.errors.len())
        } else {
            format!(
                "{} error(s), {} warning(s)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<ValidationError>, Vec<ValidationWarning>) {
        (self.errors, self.warnings)
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Accumulator threaded through every level of one run.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
}

impl Findings {
    pub(crate) fn error(&mut self, code: &'static str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            code,
            message: message.into(),
        });
    }

    pub(crate) fn warning(&mut self, code: &'static str, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            code,
            message: message.into(),
        });
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult::new(self.errors, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(errors: usize, warnings: usize) -> ValidationResult {
        let mut findings = Findings::default();
        for i in 0..errors {
            findings.error("E", format!("error {}", i));
        }
        for i in 0..warnings {
            findings.warning("W", format!("warning {}", i));
        }
        findings.finish()
    }

    #[test]
    fn summary_variants() {
        assert_eq!(result(0, 0).summary(), "Valid");
        assert_eq!(result(0, 2).summary(), "Valid with 2 warning(s)");
        assert_eq!(result(1, 0).summary(), "1 error(s)");
        assert_eq!(result(3, 1).summary(), "3 error(s), 1 warning(s)");
    }

    #[test]
    fn validity_tracks_errors_only() {
        assert!(result(0, 5).is_valid());
        assert!(!result(1, 0).is_valid());
    }

    #[test]
    fn findings_keep_insertion_order() {
        let mut findings = Findings::default();
        findings.error("FIRST", "a");
        findings.error("SECOND", "b");
        let r = findings.finish();
        assert_eq!(r.error_codes(), vec!["FIRST", "SECOND"]);
    }
}
