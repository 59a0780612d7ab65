//! Document parsing helpers for callers that start from raw markup.

use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

/// Parse a full HTML document.
#[must_use]
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Parse markup holding a single row.
///
/// A bare `<tr>` outside a table is dropped by the HTML tree builder, so
/// markup starting with `<tr` is wrapped in a `<table>` first.
#[must_use]
pub fn parse_row(html: &str) -> Html {
    let trimmed = html.trim_start();
    let is_bare_row = trimmed
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("<tr"));
    if is_bare_row {
        Html::parse_document(&format!("<table>{trimmed}</table>"))
    } else {
        Html::parse_document(html)
    }
}

/// The element to treat as the row fragment of a single-row document:
/// the first `tr` if there is one, else the root element.
#[must_use]
pub fn row_root(document: &Html) -> ElementRef<'_> {
    Selector::parse("tr")
        .ok()
        .and_then(|tr| document.select(&tr).next())
        .unwrap_or_else(|| document.root_element())
}

/// Read and parse a document from disk.
///
/// # Errors
/// Returns `ExtractError::Io` if the file cannot be read.
pub fn read_document(path: &Path) -> Result<Html, ExtractError> {
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read document");
    Ok(parse_document(&source))
}
