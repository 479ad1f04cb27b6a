//! Error types for carden.

use thiserror::Error;

/// Errors raised while validating a render configuration.
///
/// Every variant is a configuration mistake; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardenError {
    /// A border or background color is neither a known name nor `#rgb` / `#rrggbb`.
    #[error("{value} is not a valid {field}")]
    InvalidColor { field: &'static str, value: String },

    /// A named border style is not in the preset registry.
    #[error("Invalid border style: {0}")]
    UnknownBorderStyle(String),

    /// A custom glyph set is missing a key or has an empty value for it.
    #[error("Invalid border style: {0}")]
    InvalidBorderStyle(&'static str),

    /// A textual option (align, float, spacing, glyph list) could not be parsed.
    #[error("invalid {option} '{value}'")]
    InvalidOption { option: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, CardenError>;
