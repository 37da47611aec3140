//! Field-level validation.

use super::codes;
use super::constraints::validate_rules;
use super::result::Findings;
use super::rules::{follows_id_convention, is_blank};
use crate::parse::types::FieldDefinition;

/// A field's own properties, including its declared validation rules.
pub(crate) fn validate_field_properties(
    field: &FieldDefinition,
    context: &str,
    findings: &mut Findings,
) {
    if is_blank(&field.field_id) {
        findings.error(
            codes::FIELD_ID_EMPTY,
            format!("{}: Field ID is required", context),
        );
    } else if !follows_id_convention(&field.field_id) {
        findings.error(
            codes::FIELD_ID_INVALID,
            format!(
                "{}: Field ID '{}' must follow naming convention",
                context, field.field_id
            ),
        );
    }

    if is_blank(&field.name) {
        findings.error(
            codes::FIELD_NAME_EMPTY,
            format!("{}: Field name is required", context),
        );
    }

    if field.component.is_none() {
        findings.error(
            codes::COMPONENT_TYPE_NULL,
            format!("{}: Component type is required", context),
        );
    }

    if field.sequence <= 0 {
        findings.warning(
            codes::FIELD_SEQUENCE_INVALID,
            format!("{}: Field sequence should be positive", context),
        );
    }

    if let Some(rules) = &field.validation {
        validate_rules(rules, context, findings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::types::{ComponentKind, ValidationRules};
    use crate::validate::component::validate_component_specific;

    fn valid_field() -> FieldDefinition {
        FieldDefinition {
            field_id: "CUSTOMER_NAME".into(),
            name: "Customer Name".into(),
            component: Some(ComponentKind::TextField),
            sequence: 10,
            ..Default::default()
        }
    }

    fn run(field: &FieldDefinition) -> (Vec<&'static str>, Vec<&'static str>) {
        let mut findings = Findings::default();
        validate_field_properties(field, "Tab 1, Field 1", &mut findings);
        validate_component_specific(field, "Tab 1, Field 1", &mut findings);
        let result = findings.finish();
        (result.error_codes(), result.warning_codes())
    }

    #[test]
    fn valid_field_is_clean() {
        let (errors, warnings) = run(&valid_field());
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(warnings.is_empty(), "{:?}", warnings);
    }

    #[test]
    fn empty_id_is_not_also_invalid() {
        let mut f = valid_field();
        f.field_id = "  ".into();
        let (errors, _) = run(&f);
        assert_eq!(errors, vec![codes::FIELD_ID_EMPTY]);
    }

    #[test]
    fn every_property_problem_is_reported() {
        let f = FieldDefinition {
            field_id: "customerName".into(),
            name: String::new(),
            component: None,
            sequence: 0,
            validation: Some(ValidationRules {
                min: Some(10.0),
                max: Some(5.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let (errors, warnings) = run(&f);
        assert_eq!(
            errors,
            vec![
                codes::FIELD_ID_INVALID,
                codes::FIELD_NAME_EMPTY,
                codes::COMPONENT_TYPE_NULL,
                codes::INVALID_RANGE
            ]
        );
        assert_eq!(warnings, vec![codes::FIELD_SEQUENCE_INVALID]);
    }
}
