//! Parse phase: form JSON → definition snapshot.

pub mod types;

pub use types::*;

use crate::error::FormError;

/// Deserialize a window definition JSON string into a `WindowDefinition`.
pub fn parse(json: &str) -> Result<WindowDefinition, FormError> {
    serde_json::from_str::<WindowDefinition>(json).map_err(|e| {
        FormError::parse("P001", format!("Failed to parse window definition JSON: {}", e))
    })
}
