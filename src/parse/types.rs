//! Rust types mirroring the editor's window definition document.
//!
//! These types are the serde target for the form JSON the editor emits.
//! The validation engine only ever borrows them; it never mutates a snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Window kinds the downstream runtime understands.
pub const WINDOW_TYPE_TRANSACTION: &str = "Transaction";
pub const WINDOW_TYPE_QUERY: &str = "Query";

fn default_sequence() -> i32 {
    10
}

fn default_true() -> bool {
    true
}

// =============================================================================
// LENIENT FIELD DESERIALIZERS
// =============================================================================

/// The editor writes `null` for unset properties; read it as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Whole number from any JSON number; fractional values are truncated.
fn integral<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))))
}

fn sequence_or_default<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integral(deserializer)?
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or_else(default_sequence))
}

fn int_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integral(deserializer)?
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or_default())
}

// =============================================================================
// WINDOW / TAB / FIELD
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub window_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub window_type: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tabs: Vec<TabDefinition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, Value>,
}

impl WindowDefinition {
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Total number of fields across every tab.
    pub fn field_count(&self) -> usize {
        self.tabs.iter().map(TabDefinition::field_count).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tab_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_sequence", deserialize_with = "sequence_or_default")]
    pub sequence: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub tab_level: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_read_only: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_single_row: bool,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<FieldDefinition>,
}

impl Default for TabDefinition {
    fn default() -> Self {
        TabDefinition {
            tab_id: String::new(),
            name: String::new(),
            description: None,
            sequence: default_sequence(),
            tab_level: 0,
            is_read_only: false,
            is_single_row: false,
            help: None,
            fields: Vec::new(),
        }
    }
}

impl TabDefinition {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_component_kind")]
    pub component: Option<ComponentKind>,
    #[serde(default = "default_sequence", deserialize_with = "sequence_or_default")]
    pub sequence: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_read_only: bool,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_displayed: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub display_logic: Option<String>,
    #[serde(default)]
    pub validation: Option<ValidationRules>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ui: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: BTreeMap<String, Value>,
    #[serde(default)]
    pub reference: Option<ReferenceData>,
}

impl Default for FieldDefinition {
    fn default() -> Self {
        FieldDefinition {
            field_id: String::new(),
            name: String::new(),
            component: None,
            sequence: default_sequence(),
            is_required: false,
            is_read_only: false,
            is_displayed: true,
            description: None,
            help: None,
            display_logic: None,
            validation: None,
            ui: BTreeMap::new(),
            data: BTreeMap::new(),
            reference: None,
        }
    }
}

impl FieldDefinition {
    /// Look up an auxiliary data property. A JSON `null` counts as absent.
    pub fn data_property(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|v| !v.is_null())
    }
}

/// Unknown component names become `None` rather than failing the whole
/// document, so validation can report the field instead.
fn lenient_component_kind<'de, D>(deserializer: D) -> Result<Option<ComponentKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.and_then(|n| {
        let kind = ComponentKind::from_json_name(&n);
        if kind.is_none() {
            tracing::warn!(component = %n, "unknown component kind, treating as unset");
        }
        kind
    }))
}

// =============================================================================
// VALIDATION RULES / REFERENCE DATA
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    pub required_when: Option<String>,
    pub pattern: Option<String>,
    pub pattern_message: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(default, deserialize_with = "integral")]
    pub min_length: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub max_length: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub min_selections: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub max_selections: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub min_files: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub max_files: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub min_photos: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub max_photos: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub min_codes: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub max_codes: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub min_rows: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub max_rows: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub min_instances: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub max_instances: Option<i64>,
    #[serde(default, deserialize_with = "integral")]
    pub decimal_places: Option<i64>,
    pub max_file_size: Option<u64>,
    pub max_total_size: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowed_file_types: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub id: Option<String>,
    pub name: Option<String>,
    pub validation_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allow_custom_values: bool,
    pub values: Option<Vec<ReferenceValue>>,
}

impl ReferenceData {
    pub fn has_values(&self) -> bool {
        self.values.as_ref().is_some_and(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub sort_order: i32,
}

// =============================================================================
// COMPONENT KIND — closed set of editor widgets
// =============================================================================

/// Palette grouping, as shown in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    BasicInput,
    DateTime,
    Measurement,
    Selection,
    MediaScanning,
    Display,
    Interactive,
    Construction,
    DataCollection,
    InteractiveLists,
    Advanced,
}

/// Which component-specific rule set a kind is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentFamily {
    Selection,
    Checklist,
    TaskList,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    // Basic input
    TextField,
    TextAreaField,
    NumberField,
    DecimalField,
    CurrencyField,
    PercentageField,
    YesNoField,
    EmailField,
    PhoneField,
    UrlField,
    PasswordField,
    RichTextField,
    AutoCompleteField,

    // Date & time
    DateField,
    TimeField,
    DateTimeField,
    DateRangeField,
    TimeRangeField,

    // Measurement & coordinates
    MeasurementField,
    CoordinateField,
    SliderField,
    RatingField,

    // Selection
    SelectField,
    MultiSelectField,
    RadioButtonGroupField,
    CheckboxGroupField,
    TagSelectField,
    TreeSelectField,

    // Media & scanning
    QrCodeField,
    CameraField,
    QrCollectorField,
    MultiPhotoField,
    FileUploadField,
    AudioRecordingField,
    VideoRecordingField,
    DocumentScannerField,
    SignatureField,

    // Display
    LabelField,
    ImageDisplayField,
    QrDisplayField,
    BarcodeDisplayField,
    MapDisplayField,
    HtmlContentField,

    // Interactive tools
    CalculatorField,
    CounterField,
    TimerField,
    StopwatchField,
    DrawingField,
    SketchField,

    // Construction
    MaterialSelectField,
    EquipmentSelectField,
    LocationHierarchyField,
    WeatherConditionsField,
    SafetyChecklistField,
    InspectionScoreField,
    DefectCategoryField,

    // Data collection
    SurveyGridField,
    MatrixField,
    RepeatingGroupField,
    ConditionalSectionField,
    WizardStepField,
    AccordionField,

    // Interactive lists
    QrChecklistField,
    FlippableQrChecklistField,

    // Advanced
    TaskListField,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 65] = [
        ComponentKind::TextField,
        ComponentKind::TextAreaField,
        ComponentKind::NumberField,
        ComponentKind::DecimalField,
        ComponentKind::CurrencyField,
        ComponentKind::PercentageField,
        ComponentKind::YesNoField,
        ComponentKind::EmailField,
        ComponentKind::PhoneField,
        ComponentKind::UrlField,
        ComponentKind::PasswordField,
        ComponentKind::RichTextField,
        ComponentKind::AutoCompleteField,
        ComponentKind::DateField,
        ComponentKind::TimeField,
        ComponentKind::DateTimeField,
        ComponentKind::DateRangeField,
        ComponentKind::TimeRangeField,
        ComponentKind::MeasurementField,
        ComponentKind::CoordinateField,
        ComponentKind::SliderField,
        ComponentKind::RatingField,
        ComponentKind::SelectField,
        ComponentKind::MultiSelectField,
        ComponentKind::RadioButtonGroupField,
        ComponentKind::CheckboxGroupField,
        ComponentKind::TagSelectField,
        ComponentKind::TreeSelectField,
        ComponentKind::QrCodeField,
        ComponentKind::CameraField,
        ComponentKind::QrCollectorField,
        ComponentKind::MultiPhotoField,
        ComponentKind::FileUploadField,
        ComponentKind::AudioRecordingField,
        ComponentKind::VideoRecordingField,
        ComponentKind::DocumentScannerField,
        ComponentKind::SignatureField,
        ComponentKind::LabelField,
        ComponentKind::ImageDisplayField,
        ComponentKind::QrDisplayField,
        ComponentKind::BarcodeDisplayField,
        ComponentKind::MapDisplayField,
        ComponentKind::HtmlContentField,
        ComponentKind::CalculatorField,
        ComponentKind::CounterField,
        ComponentKind::TimerField,
        ComponentKind::StopwatchField,
        ComponentKind::DrawingField,
        ComponentKind::SketchField,
        ComponentKind::MaterialSelectField,
        ComponentKind::EquipmentSelectField,
        ComponentKind::LocationHierarchyField,
        ComponentKind::WeatherConditionsField,
        ComponentKind::SafetyChecklistField,
        ComponentKind::InspectionScoreField,
        ComponentKind::DefectCategoryField,
        ComponentKind::SurveyGridField,
        ComponentKind::MatrixField,
        ComponentKind::RepeatingGroupField,
        ComponentKind::ConditionalSectionField,
        ComponentKind::WizardStepField,
        ComponentKind::AccordionField,
        ComponentKind::QrChecklistField,
        ComponentKind::FlippableQrChecklistField,
        ComponentKind::TaskListField,
    ];

    /// Name used for this kind in the form JSON.
    pub fn json_name(&self) -> &'static str {
        match self {
            ComponentKind::TextField => "TextField",
            ComponentKind::TextAreaField => "TextAreaField",
            ComponentKind::NumberField => "NumberField",
            ComponentKind::DecimalField => "DecimalField",
            ComponentKind::CurrencyField => "CurrencyField",
            ComponentKind::PercentageField => "PercentageField",
            ComponentKind::YesNoField => "YesNoField",
            ComponentKind::EmailField => "EmailField",
            ComponentKind::PhoneField => "PhoneField",
            ComponentKind::UrlField => "URLField",
            ComponentKind::PasswordField => "PasswordField",
            ComponentKind::RichTextField => "RichTextField",
            ComponentKind::AutoCompleteField => "AutoCompleteField",
            ComponentKind::DateField => "DateField",
            ComponentKind::TimeField => "TimeField",
            ComponentKind::DateTimeField => "DateTimeField",
            ComponentKind::DateRangeField => "DateRangeField",
            ComponentKind::TimeRangeField => "TimeRangeField",
            ComponentKind::MeasurementField => "MeasurementField",
            ComponentKind::CoordinateField => "CoordinateField",
            ComponentKind::SliderField => "SliderField",
            ComponentKind::RatingField => "RatingField",
            ComponentKind::SelectField => "SelectField",
            ComponentKind::MultiSelectField => "MultiSelectField",
            ComponentKind::RadioButtonGroupField => "RadioButtonGroupField",
            ComponentKind::CheckboxGroupField => "CheckboxGroupField",
            ComponentKind::TagSelectField => "TagSelectField",
            ComponentKind::TreeSelectField => "TreeSelectField",
            ComponentKind::QrCodeField => "QRCodeField",
            ComponentKind::CameraField => "CameraField",
            ComponentKind::QrCollectorField => "QRCollectorField",
            ComponentKind::MultiPhotoField => "MultiPhotoField",
            ComponentKind::FileUploadField => "FileUploadField",
            ComponentKind::AudioRecordingField => "AudioRecordingField",
            ComponentKind::VideoRecordingField => "VideoRecordingField",
            ComponentKind::DocumentScannerField => "DocumentScannerField",
            ComponentKind::SignatureField => "SignatureField",
            ComponentKind::LabelField => "LabelField",
            ComponentKind::ImageDisplayField => "ImageDisplayField",
            ComponentKind::QrDisplayField => "QRDisplayField",
            ComponentKind::BarcodeDisplayField => "BarcodeDisplayField",
            ComponentKind::MapDisplayField => "MapDisplayField",
            ComponentKind::HtmlContentField => "HTMLContentField",
            ComponentKind::CalculatorField => "CalculatorField",
            ComponentKind::CounterField => "CounterField",
            ComponentKind::TimerField => "TimerField",
            ComponentKind::StopwatchField => "StopwatchField",
            ComponentKind::DrawingField => "DrawingField",
            ComponentKind::SketchField => "SketchField",
            ComponentKind::MaterialSelectField => "MaterialSelectField",
            ComponentKind::EquipmentSelectField => "EquipmentSelectField",
            ComponentKind::LocationHierarchyField => "LocationHierarchyField",
            ComponentKind::WeatherConditionsField => "WeatherConditionsField",
            ComponentKind::SafetyChecklistField => "SafetyChecklistField",
            ComponentKind::InspectionScoreField => "InspectionScoreField",
            ComponentKind::DefectCategoryField => "DefectCategoryField",
            ComponentKind::SurveyGridField => "SurveyGridField",
            ComponentKind::MatrixField => "MatrixField",
            ComponentKind::RepeatingGroupField => "RepeatingGroupField",
            ComponentKind::ConditionalSectionField => "ConditionalSectionField",
            ComponentKind::WizardStepField => "WizardStepField",
            ComponentKind::AccordionField => "AccordionField",
            ComponentKind::QrChecklistField => "QRChecklistField",
            ComponentKind::FlippableQrChecklistField => "FlippableQRChecklistField",
            ComponentKind::TaskListField => "TaskListField",
        }
    }

    pub fn from_json_name(name: &str) -> Option<ComponentKind> {
        ComponentKind::ALL
            .iter()
            .copied()
            .find(|k| k.json_name() == name)
    }

    pub fn category(&self) -> ComponentCategory {
        use ComponentKind::*;
        match self {
            TextField | TextAreaField | NumberField | DecimalField | CurrencyField
            | PercentageField | YesNoField | EmailField | PhoneField | UrlField
            | PasswordField | RichTextField | AutoCompleteField => ComponentCategory::BasicInput,
            DateField | TimeField | DateTimeField | DateRangeField | TimeRangeField => {
                ComponentCategory::DateTime
            }
            MeasurementField | CoordinateField | SliderField | RatingField => {
                ComponentCategory::Measurement
            }
            SelectField | MultiSelectField | RadioButtonGroupField | CheckboxGroupField
            | TagSelectField | TreeSelectField => ComponentCategory::Selection,
            QrCodeField | CameraField | QrCollectorField | MultiPhotoField | FileUploadField
            | AudioRecordingField | VideoRecordingField | DocumentScannerField
            | SignatureField => ComponentCategory::MediaScanning,
            LabelField | ImageDisplayField | QrDisplayField | BarcodeDisplayField
            | MapDisplayField | HtmlContentField => ComponentCategory::Display,
            CalculatorField | CounterField | TimerField | StopwatchField | DrawingField
            | SketchField => ComponentCategory::Interactive,
            MaterialSelectField | EquipmentSelectField | LocationHierarchyField
            | WeatherConditionsField | SafetyChecklistField | InspectionScoreField
            | DefectCategoryField => ComponentCategory::Construction,
            SurveyGridField | MatrixField | RepeatingGroupField | ConditionalSectionField
            | WizardStepField | AccordionField => ComponentCategory::DataCollection,
            QrChecklistField | FlippableQrChecklistField => ComponentCategory::InteractiveLists,
            TaskListField => ComponentCategory::Advanced,
        }
    }

    /// Tag and tree selects carry their own option sources, so only the four
    /// list-backed selection widgets require reference data.
    pub fn family(&self) -> ComponentFamily {
        use ComponentKind::*;
        match self {
            SelectField | MultiSelectField | RadioButtonGroupField | CheckboxGroupField => {
                ComponentFamily::Selection
            }
            QrChecklistField | FlippableQrChecklistField => ComponentFamily::Checklist,
            TaskListField => ComponentFamily::TaskList,
            TextField | TextAreaField | NumberField | DecimalField | CurrencyField
            | PercentageField | YesNoField | EmailField | PhoneField | UrlField
            | PasswordField | RichTextField | AutoCompleteField | DateField | TimeField
            | DateTimeField | DateRangeField | TimeRangeField | MeasurementField
            | CoordinateField | SliderField | RatingField | TagSelectField | TreeSelectField
            | QrCodeField | CameraField | QrCollectorField | MultiPhotoField | FileUploadField
            | AudioRecordingField | VideoRecordingField | DocumentScannerField
            | SignatureField | LabelField | ImageDisplayField | QrDisplayField
            | BarcodeDisplayField | MapDisplayField | HtmlContentField | CalculatorField
            | CounterField | TimerField | StopwatchField | DrawingField | SketchField
            | MaterialSelectField | EquipmentSelectField | LocationHierarchyField
            | WeatherConditionsField | SafetyChecklistField | InspectionScoreField
            | DefectCategoryField | SurveyGridField | MatrixField | RepeatingGroupField
            | ConditionalSectionField | WizardStepField | AccordionField => ComponentFamily::Other,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.json_name())
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.json_name())
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ComponentKind::from_json_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown component kind '{}'", name)))
    }
}
