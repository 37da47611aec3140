//! Crate error type for the phases that can fail: parsing a definition
//! document and loading caller options. The validation engine itself never
//! fails; everything it finds is reported through `ValidationResult`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Config,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Config => write!(f, "Config"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("[{phase}:{code}] {message}")]
pub struct FormError {
    pub code: &'static str,
    pub phase: Phase,
    pub message: String,
}

impl FormError {
    pub fn parse(code: &'static str, message: impl Into<String>) -> Self {
        FormError {
            code,
            phase: Phase::Parse,
            message: message.into(),
        }
    }

    pub fn config(code: &'static str, message: impl Into<String>) -> Self {
        FormError {
            code,
            phase: Phase::Config,
            message: message.into(),
        }
    }
}
