//! Extractor error types.
//!
//! Extraction of a row never fails. These errors come from compiling a row
//! layout or reading a document from disk.

/// Errors that can occur while preparing extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid {field} selector '{selector}': {message}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
