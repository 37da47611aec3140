use formcheck::parse::*;

// =============================================================================
// Definition builders
// =============================================================================

/// A text field with a conventional identifier and the given sequence.
pub fn field(id: &str, sequence: i32) -> FieldDefinition {
    field_of(id, sequence, ComponentKind::TextField)
}

pub fn field_of(id: &str, sequence: i32, kind: ComponentKind) -> FieldDefinition {
    FieldDefinition {
        field_id: id.into(),
        name: id.to_lowercase(),
        component: Some(kind),
        sequence,
        ..Default::default()
    }
}

pub fn tab(id: &str, sequence: i32, fields: Vec<FieldDefinition>) -> TabDefinition {
    TabDefinition {
        tab_id: id.into(),
        name: id.to_lowercase(),
        sequence,
        fields,
        ..Default::default()
    }
}

/// Tab holding one text field; identifiers derived from `index`.
pub fn tab_with_one_field(index: usize) -> TabDefinition {
    tab(
        &format!("TAB_{}", index),
        (index as i32 + 1) * 10,
        vec![field(&format!("FIELD_{}", index), 10)],
    )
}

/// Minimal window that validates with no errors and no warnings.
pub fn window(tabs: Vec<TabDefinition>) -> WindowDefinition {
    WindowDefinition {
        window_id: "ORDER_ENTRY".into(),
        name: "Order Entry".into(),
        window_type: Some(WINDOW_TYPE_TRANSACTION.into()),
        tabs,
        ..Default::default()
    }
}

pub fn clean_window() -> WindowDefinition {
    window(vec![tab_with_one_field(0)])
}

pub fn count(codes: &[&str], code: &str) -> usize {
    codes.iter().filter(|c| **c == code).count()
}
