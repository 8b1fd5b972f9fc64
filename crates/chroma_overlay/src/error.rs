//! Compiler error types

use chroma_color::ColorError;
use thiserror::Error;

/// Errors that abort a compile. No partial archive is ever returned.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// Seed color was not 6 or 8 hex digits
    #[error(transparent)]
    InvalidColorFormat(#[from] ColorError),

    /// Package identifier is not a dotted name such as `com.example.theme`
    #[error("Invalid package name: `{name}`")]
    InvalidPackageName { name: String },

    /// Rendering one of the resource documents failed
    #[error("Failed to render {path}")]
    DocumentRender {
        path: &'static str,
        #[source]
        source: std::fmt::Error,
    },

    /// Writing or finalizing the archive failed
    #[error("Failed to write archive{}", entry_suffix(.entry))]
    ArchiveWrite {
        /// Entry being written, `None` while finalizing
        entry: Option<String>,
        #[source]
        source: zip::result::ZipError,
    },
}

fn entry_suffix(entry: &Option<String>) -> String {
    match entry {
        Some(entry) => format!(" entry {entry}"),
        None => String::new(),
    }
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, OverlayError>;
