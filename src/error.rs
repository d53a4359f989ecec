//! Error types for samplepdf library.

use std::io;
use thiserror::Error;

/// Result type alias for samplepdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling or inspecting PDF documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Inline markup in a block could not be parsed.
    #[error("Malformed markup in block {block}: {message}")]
    Markup {
        /// Zero-based index of the offending block
        block: usize,
        /// What went wrong
        message: String,
    },

    /// A block cannot be placed on any page.
    #[error("Layout error: {0}")]
    Layout(String),

    /// A block references a style that is not in the style sheet.
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// A style has a non-positive size or negative spacing.
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// Page size or margins leave no room for content.
    #[error("Invalid page setup: {0}")]
    InvalidPageSetup(String),

    /// Error building or reading the PDF object graph.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Error reading or writing JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// No fixture with the given name.
    #[error("Unknown fixture: {0}")]
    UnknownFixture(String),
}

impl Error {
    /// Create a markup error for the block at `block`.
    pub fn markup(block: usize, message: impl Into<String>) -> Self {
        Error::Markup {
            block,
            message: message.into(),
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::markup(3, "unterminated <b>");
        assert_eq!(
            err.to_string(),
            "Malformed markup in block 3: unterminated <b>"
        );

        let err = Error::UnknownStyle("heading9".into());
        assert_eq!(err.to_string(), "Unknown style: heading9");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
