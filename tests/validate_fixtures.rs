//! End-to-end: fixture JSON → parse → validate.

use formcheck::parse;
use formcheck::validate::{self, ValidationResult, codes};

fn validate_fixture(json: &str) -> ValidationResult {
    let window = parse::parse(json).expect("Should parse");
    validate::validate_window(Some(&window))
}

#[test]
fn site_inspection_is_clean() {
    let result = validate_fixture(include_str!("fixtures/site_inspection.json"));
    assert!(result.is_valid(), "Expected no errors, got: {:?}", result);
    insta::assert_snapshot!(result.summary(), @"Valid");
}

#[test]
fn broken_window_reports_everything_in_order() {
    let result = validate_fixture(include_str!("fixtures/broken_window.json"));
    assert_eq!(
        result.error_codes(),
        vec![
            codes::WINDOW_ID_INVALID,
            codes::INVALID_REGEX,
            codes::INVALID_LENGTH_RANGE,
            codes::DUPLICATE_FIELD_ID,
            codes::DUPLICATE_TAB_ID,
        ]
    );
    assert_eq!(
        result.warning_codes(),
        vec![
            codes::WINDOW_TYPE_UNKNOWN,
            codes::DUPLICATE_FIELD_SEQUENCE,
            codes::NO_REFERENCE_DATA,
            codes::DUPLICATE_TAB_SEQUENCE,
            codes::NO_FIELDS,
            codes::EMPTY_TAB,
        ]
    );
    insta::assert_snapshot!(result.summary(), @"5 error(s), 6 warning(s)");
}

#[test]
fn broken_window_messages_carry_positions() {
    let result = validate_fixture(include_str!("fixtures/broken_window.json"));
    let messages: Vec<&str> = result.errors().iter().map(|e| e.message.as_str()).collect();
    assert!(messages[1].starts_with("Tab 1, Field 1: Invalid regex pattern '[invalid('"));
    assert_eq!(messages[3], "Tab 1, Field 2: Duplicate field ID 'INSPECTOR'");
    assert_eq!(messages[4], "Tab 2: Duplicate tab ID 'GENERAL'");
}

#[test]
fn unknown_components_are_reported_as_missing() {
    let result = validate_fixture(include_str!("fixtures/unknown_component.json"));
    assert_eq!(
        result.error_codes(),
        vec![codes::COMPONENT_TYPE_NULL, codes::COMPONENT_TYPE_NULL]
    );
    insta::assert_snapshot!(result.to_string(), @"2 error(s)");
}
