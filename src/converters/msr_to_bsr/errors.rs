//! Error types for braille conversion
//!
//! Only precondition failures are errors. Values with no braille
//! equivalent are reported through the diagnostics sink instead.

use thiserror::Error;

/// Fatal conversion error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Settings that no braille layout can honour (e.g. zero cells per line)
    #[error("Invalid translation settings: {0}")]
    InvalidSettings(String),

    /// Settings JSON could not be decoded
    #[error("Settings parsing failed: {0}")]
    SettingsParse(String),

    /// A BSR score with no page was handed to the finalizer
    #[error("BSR score has no page to finalize")]
    EmptyScore,
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::SettingsParse(err.to_string())
    }
}
