//! Window definition validation.
//!
//! Walks window → tabs → fields depth-first and collects every finding
//! into one `ValidationResult`. No check short-circuits another, except an
//! absent window (nothing to check) and an empty tab list (no per-tab pass;
//! the structure heuristics still run).

pub mod codes;
pub mod component;
pub mod options;
pub mod result;
pub mod rules;

mod constraints;
mod field;
mod tab;
mod window;

pub use options::ValidationOptions;
pub use result::{ValidationError, ValidationResult, ValidationWarning};

use crate::parse::types::WindowDefinition;
use result::Findings;

/// Validate a complete window definition snapshot.
pub fn validate_window(window: Option<&WindowDefinition>) -> ValidationResult {
    let mut findings = Findings::default();

    let Some(window) = window else {
        findings.error(codes::WINDOW_NULL, "Window definition cannot be null");
        return findings.finish();
    };

    window::validate_window_properties(window, &mut findings);
    window::validate_tabs(&window.tabs, &mut findings);
    window::validate_overall_structure(window, &mut findings);

    let result = findings.finish();
    tracing::debug!(
        window_id = %window.window_id,
        tabs = window.tab_count(),
        fields = window.field_count(),
        summary = %result,
        "window validated"
    );
    result
}

/// Validate, then apply caller options (suppression, warning visibility,
/// strict mode) to the result.
pub fn validate_with(
    window: Option<&WindowDefinition>,
    options: &ValidationOptions,
) -> ValidationResult {
    options.apply(validate_window(window))
}
