//! Component-specific requirements, dispatched on the field's widget family.
//! Adding a `ComponentKind` forces a decision in `ComponentKind::family`.

use super::codes;
use super::result::Findings;
use crate::parse::types::{ComponentFamily, FieldDefinition};

/// Auxiliary data keys read by the list-style widgets.
pub const CHECKLIST_ITEMS_KEY: &str = "items";
pub const TASKS_KEY: &str = "tasks";

pub(crate) fn validate_component_specific(
    field: &FieldDefinition,
    context: &str,
    findings: &mut Findings,
) {
    let Some(kind) = field.component else { return };

    match kind.family() {
        ComponentFamily::Selection => validate_selection(field, context, findings),
        ComponentFamily::Checklist => {
            if field.data_property(CHECKLIST_ITEMS_KEY).is_none() {
                findings.warning(
                    codes::NO_CHECKLIST_ITEMS,
                    format!("{}: QR checklist field should have items", context),
                );
            }
        }
        ComponentFamily::TaskList => {
            if field.data_property(TASKS_KEY).is_none() {
                findings.warning(
                    codes::NO_TASK_DATA,
                    format!("{}: Task list field should have task data", context),
                );
            }
        }
        ComponentFamily::Other => {}
    }
}

fn validate_selection(field: &FieldDefinition, context: &str, findings: &mut Findings) {
    // Missing reference data already says everything; don't also report
    // its empty value list.
    let Some(reference) = &field.reference else {
        findings.warning(
            codes::NO_REFERENCE_DATA,
            format!("{}: Selection field should have reference data", context),
        );
        return;
    };

    if !reference.has_values() {
        findings.warning(
            codes::NO_REFERENCE_VALUES,
            format!("{}: Reference data has no values", context),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::types::{ComponentKind, ReferenceData, ReferenceValue};

    fn field(kind: ComponentKind) -> FieldDefinition {
        FieldDefinition {
            field_id: "F".into(),
            name: "F".into(),
            component: Some(kind),
            ..Default::default()
        }
    }

    fn warnings_for(field: &FieldDefinition) -> Vec<&'static str> {
        let mut findings = Findings::default();
        validate_component_specific(field, "Tab 1, Field 1", &mut findings);
        findings.finish().warning_codes()
    }

    #[test]
    fn selection_without_reference_warns_once() {
        let f = field(ComponentKind::SelectField);
        assert_eq!(warnings_for(&f), vec![codes::NO_REFERENCE_DATA]);
    }

    #[test]
    fn selection_with_empty_reference() {
        let mut f = field(ComponentKind::CheckboxGroupField);
        f.reference = Some(ReferenceData::default());
        assert_eq!(warnings_for(&f), vec![codes::NO_REFERENCE_VALUES]);

        f.reference = Some(ReferenceData {
            values: Some(vec![]),
            ..Default::default()
        });
        assert_eq!(warnings_for(&f), vec![codes::NO_REFERENCE_VALUES]);
    }

    #[test]
    fn selection_with_values_is_quiet() {
        let mut f = field(ComponentKind::MultiSelectField);
        f.reference = Some(ReferenceData {
            values: Some(vec![ReferenceValue {
                key: "Y".into(),
                display: "Yes".into(),
                ..Default::default()
            }]),
            ..Default::default()
        });
        assert!(warnings_for(&f).is_empty());
    }

    #[test]
    fn checklist_needs_items() {
        let mut f = field(ComponentKind::FlippableQrChecklistField);
        assert_eq!(warnings_for(&f), vec![codes::NO_CHECKLIST_ITEMS]);
        f.data.insert("items".into(), serde_json::json!([]));
        assert!(warnings_for(&f).is_empty());
    }

    #[test]
    fn task_list_needs_tasks() {
        let mut f = field(ComponentKind::TaskListField);
        f.data.insert("items".into(), serde_json::json!([]));
        assert_eq!(warnings_for(&f), vec![codes::NO_TASK_DATA]);
        f.data.insert("tasks".into(), serde_json::json!([{"id": "T1"}]));
        assert!(warnings_for(&f).is_empty());
    }

    #[test]
    fn other_kinds_and_unset_kind_are_no_ops() {
        assert!(warnings_for(&field(ComponentKind::TagSelectField)).is_empty());
        let mut f = field(ComponentKind::TextField);
        f.component = None;
        assert!(warnings_for(&f).is_empty());
    }
}
