//! Consistency checks over a field's declared validation rules.

use super::codes;
use super::result::Findings;
use super::rules::{compile_pattern, range_inverted};
use crate::parse::types::ValidationRules;

/// Run every rule-consistency check. Each range pair is checked on its own,
/// so one block can produce several errors.
pub(crate) fn validate_rules(rules: &ValidationRules, context: &str, findings: &mut Findings) {
    if let Some(pattern) = &rules.pattern {
        if let Err(reason) = compile_pattern(pattern) {
            findings.error(
                codes::INVALID_REGEX,
                format!("{}: Invalid regex pattern '{}': {}", context, pattern, reason),
            );
        }
    }

    if range_inverted(rules.min, rules.max) {
        findings.error(
            codes::INVALID_RANGE,
            format!("{}: Minimum value cannot be greater than maximum value", context),
        );
    }

    let count_ranges = [
        (rules.min_length, rules.max_length, codes::INVALID_LENGTH_RANGE, "length"),
        (rules.min_selections, rules.max_selections, codes::INVALID_SELECTION_RANGE, "selections"),
        (rules.min_files, rules.max_files, codes::INVALID_FILE_RANGE, "files"),
        (rules.min_photos, rules.max_photos, codes::INVALID_PHOTO_RANGE, "photos"),
        (rules.min_codes, rules.max_codes, codes::INVALID_CODE_RANGE, "codes"),
        (rules.min_rows, rules.max_rows, codes::INVALID_ROW_RANGE, "rows"),
        (rules.min_instances, rules.max_instances, codes::INVALID_INSTANCE_RANGE, "instances"),
    ];
    for (min, max, code, what) in count_ranges {
        if range_inverted(min, max) {
            findings.error(
                code,
                format!(
                    "{}: Minimum {} cannot be greater than maximum {}",
                    context, what, what
                ),
            );
        }
    }

    if let Some(places) = rules.decimal_places {
        if places < 0 {
            findings.error(
                codes::INVALID_DECIMAL_PLACES,
                format!("{}: Decimal places cannot be negative ({})", context, places),
            );
        }
    }
}
