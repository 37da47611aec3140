//! Stable finding codes. Callers filter and suppress on these, so a code's
//! meaning never changes once published; new codes may be added.

// Window
pub const WINDOW_NULL: &str = "WINDOW_NULL";
pub const WINDOW_ID_EMPTY: &str = "WINDOW_ID_EMPTY";
pub const WINDOW_ID_INVALID: &str = "WINDOW_ID_INVALID";
pub const WINDOW_NAME_EMPTY: &str = "WINDOW_NAME_EMPTY";
pub const WINDOW_NAME_LONG: &str = "WINDOW_NAME_LONG";
pub const WINDOW_TYPE_NULL: &str = "WINDOW_TYPE_NULL";
pub const WINDOW_TYPE_UNKNOWN: &str = "WINDOW_TYPE_UNKNOWN";
pub const WINDOW_DESC_LONG: &str = "WINDOW_DESC_LONG";
pub const NO_TABS: &str = "NO_TABS";
pub const MANY_TABS: &str = "MANY_TABS";
pub const MANY_FIELDS: &str = "MANY_FIELDS";
pub const EMPTY_TAB: &str = "EMPTY_TAB";

// Tab
pub const TAB_ID_EMPTY: &str = "TAB_ID_EMPTY";
pub const TAB_ID_INVALID: &str = "TAB_ID_INVALID";
pub const TAB_NAME_EMPTY: &str = "TAB_NAME_EMPTY";
pub const TAB_SEQUENCE_INVALID: &str = "TAB_SEQUENCE_INVALID";
pub const DUPLICATE_TAB_ID: &str = "DUPLICATE_TAB_ID";
pub const DUPLICATE_TAB_SEQUENCE: &str = "DUPLICATE_TAB_SEQUENCE";
pub const NO_FIELDS: &str = "NO_FIELDS";

// Field
pub const FIELD_ID_EMPTY: &str = "FIELD_ID_EMPTY";
pub const FIELD_ID_INVALID: &str = "FIELD_ID_INVALID";
pub const FIELD_NAME_EMPTY: &str = "FIELD_NAME_EMPTY";
pub const COMPONENT_TYPE_NULL: &str = "COMPONENT_TYPE_NULL";
pub const FIELD_SEQUENCE_INVALID: &str = "FIELD_SEQUENCE_INVALID";
pub const DUPLICATE_FIELD_ID: &str = "DUPLICATE_FIELD_ID";
pub const DUPLICATE_FIELD_SEQUENCE: &str = "DUPLICATE_FIELD_SEQUENCE";

// Validation rules
pub const INVALID_REGEX: &str = "INVALID_REGEX";
pub const INVALID_RANGE: &str = "INVALID_RANGE";
pub const INVALID_LENGTH_RANGE: &str = "INVALID_LENGTH_RANGE";
pub const INVALID_SELECTION_RANGE: &str = "INVALID_SELECTION_RANGE";
pub const INVALID_FILE_RANGE: &str = "INVALID_FILE_RANGE";
pub const INVALID_PHOTO_RANGE: &str = "INVALID_PHOTO_RANGE";
pub const INVALID_CODE_RANGE: &str = "INVALID_CODE_RANGE";
pub const INVALID_ROW_RANGE: &str = "INVALID_ROW_RANGE";
pub const INVALID_INSTANCE_RANGE: &str = "INVALID_INSTANCE_RANGE";
pub const INVALID_DECIMAL_PLACES: &str = "INVALID_DECIMAL_PLACES";

// Component-specific
pub const NO_REFERENCE_DATA: &str = "NO_REFERENCE_DATA";
pub const NO_REFERENCE_VALUES: &str = "NO_REFERENCE_VALUES";
pub const NO_CHECKLIST_ITEMS: &str = "NO_CHECKLIST_ITEMS";
pub const NO_TASK_DATA: &str = "NO_TASK_DATA";
