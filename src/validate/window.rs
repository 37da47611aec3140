//! Window-level validation and whole-definition heuristics.

use super::codes;
use super::result::Findings;
use super::rules::{SiblingTracker, follows_id_convention, is_blank, longer_than};
use super::tab::{validate_fields, validate_tab_properties};
use crate::parse::types::{TabDefinition, WINDOW_TYPE_QUERY, WINDOW_TYPE_TRANSACTION, WindowDefinition};

const MAX_NAME_CHARS: usize = 100;
const MAX_DESCRIPTION_CHARS: usize = 500;
const MAX_TABS: usize = 10;
const MAX_FIELDS: usize = 50;

pub(crate) fn validate_window_properties(window: &WindowDefinition, findings: &mut Findings) {
    if is_blank(&window.window_id) {
        findings.error(codes::WINDOW_ID_EMPTY, "Window ID is required");
    } else if !follows_id_convention(&window.window_id) {
        findings.error(
            codes::WINDOW_ID_INVALID,
            format!(
                "Window ID '{}' must start with uppercase letter and contain only uppercase letters, numbers, and underscores",
                window.window_id
            ),
        );
    }

    if is_blank(&window.name) {
        findings.error(codes::WINDOW_NAME_EMPTY, "Window name is required");
    } else if longer_than(&window.name, MAX_NAME_CHARS) {
        findings.warning(
            codes::WINDOW_NAME_LONG,
            format!("Window name is quite long (>{} characters)", MAX_NAME_CHARS),
        );
    }

    match window.window_type.as_deref() {
        None => findings.warning(
            codes::WINDOW_TYPE_NULL,
            format!("Window type not specified, defaulting to '{}'", WINDOW_TYPE_TRANSACTION),
        ),
        Some(kind) if kind != WINDOW_TYPE_TRANSACTION && kind != WINDOW_TYPE_QUERY => {
            findings.warning(
                codes::WINDOW_TYPE_UNKNOWN,
                format!("Unknown window type: {}", kind),
            )
        }
        Some(_) => {}
    }

    if let Some(description) = &window.description {
        if longer_than(description, MAX_DESCRIPTION_CHARS) {
            findings.warning(
                codes::WINDOW_DESC_LONG,
                format!(
                    "Window description is quite long (>{} characters)",
                    MAX_DESCRIPTION_CHARS
                ),
            );
        }
    }
}

/// Validate tabs in stored order. Repeated tab IDs are errors, repeated
/// sequences only warnings.
pub(crate) fn validate_tabs(tabs: &[TabDefinition], findings: &mut Findings) {
    if tabs.is_empty() {
        findings.error(codes::NO_TABS, "Window must have at least one tab");
        return;
    }

    let mut siblings = SiblingTracker::default();

    for (i, tab) in tabs.iter().enumerate() {
        let context = format!("Tab {}", i + 1);

        validate_tab_properties(tab, &context, findings);

        if siblings.repeat_id(&tab.tab_id) {
            findings.error(
                codes::DUPLICATE_TAB_ID,
                format!("{}: Duplicate tab ID '{}'", context, tab.tab_id),
            );
        }
        if siblings.repeat_sequence(tab.sequence) {
            findings.warning(
                codes::DUPLICATE_TAB_SEQUENCE,
                format!("{}: Duplicate tab sequence {}", context, tab.sequence),
            );
        }

        validate_fields(&tab.fields, &context, findings);
    }
}

/// Size heuristics over whatever tabs exist. Always warnings.
pub(crate) fn validate_overall_structure(window: &WindowDefinition, findings: &mut Findings) {
    let tab_count = window.tab_count();
    if tab_count > MAX_TABS {
        findings.warning(
            codes::MANY_TABS,
            format!(
                "Window has many tabs ({}). Consider organizing content differently.",
                tab_count
            ),
        );
    }

    let field_count = window.field_count();
    if field_count > MAX_FIELDS {
        findings.warning(
            codes::MANY_FIELDS,
            format!(
                "Window has many fields ({}). Consider breaking into multiple forms.",
                field_count
            ),
        );
    }

    for tab in &window.tabs {
        if tab.field_count() == 0 {
            findings.warning(codes::EMPTY_TAB, format!("Tab '{}' has no fields", tab.name));
        }
    }
}
