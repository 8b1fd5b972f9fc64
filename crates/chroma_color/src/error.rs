//! Color error types

use thiserror::Error;

/// Errors raised while parsing a seed color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input was not 6 (RRGGBB) or 8 (AARRGGBB) hex digits
    #[error("Invalid color format: `{input}` (expected RRGGBB or AARRGGBB hex digits)")]
    InvalidColorFormat {
        /// The trimmed input with any leading `#` removed
        input: String,
    },
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
