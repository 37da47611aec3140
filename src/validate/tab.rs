//! Tab-level validation: a tab's own properties plus its field collection.

use super::codes;
use super::component::validate_component_specific;
use super::field::validate_field_properties;
use super::result::Findings;
use super::rules::{SiblingTracker, follows_id_convention, is_blank};
use crate::parse::types::{FieldDefinition, TabDefinition};

pub(crate) fn validate_tab_properties(tab: &TabDefinition, context: &str, findings: &mut Findings) {
    if is_blank(&tab.tab_id) {
        findings.error(codes::TAB_ID_EMPTY, format!("{}: Tab ID is required", context));
    } else if !follows_id_convention(&tab.tab_id) {
        findings.error(
            codes::TAB_ID_INVALID,
            format!(
                "{}: Tab ID '{}' must follow naming convention (uppercase, letters/numbers/underscores)",
                context, tab.tab_id
            ),
        );
    }

    if is_blank(&tab.name) {
        findings.error(codes::TAB_NAME_EMPTY, format!("{}: Tab name is required", context));
    }

    if tab.sequence <= 0 {
        findings.warning(
            codes::TAB_SEQUENCE_INVALID,
            format!(
                "{}: Tab sequence should be positive (typically 10, 20, 30...)",
                context
            ),
        );
    }
}

/// Validate each field in stored order, flagging repeated identifiers
/// (error) and repeated sequences (warning) among the tab's fields.
pub(crate) fn validate_fields(fields: &[FieldDefinition], tab_context: &str, findings: &mut Findings) {
    if fields.is_empty() {
        findings.warning(codes::NO_FIELDS, format!("{}: Tab has no fields", tab_context));
        return;
    }

    let mut siblings = SiblingTracker::default();

    for (i, field) in fields.iter().enumerate() {
        let context = format!("{}, Field {}", tab_context, i + 1);

        validate_field_properties(field, &context, findings);

        if siblings.repeat_id(&field.field_id) {
            findings.error(
                codes::DUPLICATE_FIELD_ID,
                format!("{}: Duplicate field ID '{}'", context, field.field_id),
            );
        }
        if siblings.repeat_sequence(field.sequence) {
            findings.warning(
                codes::DUPLICATE_FIELD_SEQUENCE,
                format!("{}: Duplicate field sequence {}", context, field.sequence),
            );
        }

        validate_component_specific(field, &context, findings);
    }
}
