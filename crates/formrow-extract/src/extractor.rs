//! Attribute extractor for admin form rows.
//!
//! Given one row fragment (label cell + value cell), resolves the
//! attribute's name and its current value(s):
//! - the name comes from the label's `for` reference, the label cell's text,
//!   or the `"Unknown name"` sentinel
//! - the value comes from the first control found, in the order
//!   input > textarea > select, or a sentinel when none matches
//!
//! Extraction never fails: unrecognized shapes degrade to sentinel values.

mod helpers;
mod name;
mod value;

use formrow_config::FormrowConfig;
use formrow_core::{
    AttributeTable, ExtractionResult, ResolvedAttribute, RowReport, UncheckedPolicy,
};
use scraper::{ElementRef, Html};

use crate::error::ExtractError;
use crate::layout::RowLayout;

/// Resolves `{name: values}` from positioned row fragments.
///
/// Holds only compiled selectors, so one extractor can be shared across
/// threads and reused for any number of rows and documents.
#[derive(Debug, Clone)]
pub struct AttributeExtractor {
    layout: RowLayout,
    policy: UncheckedPolicy,
}

impl AttributeExtractor {
    #[must_use]
    pub const fn new(layout: RowLayout) -> Self {
        Self {
            layout,
            policy: UncheckedPolicy::Preserve,
        }
    }

    /// Extractor for the built-in Magento layout.
    ///
    /// # Errors
    /// Never in practice; see [`RowLayout::magento`].
    pub fn magento() -> Result<Self, ExtractError> {
        RowLayout::magento().map(Self::new)
    }

    /// Build from loaded configuration (layout selectors + unchecked policy).
    ///
    /// # Errors
    /// Returns `ExtractError::InvalidSelector` if a configured selector does
    /// not parse.
    pub fn from_config(config: &FormrowConfig) -> Result<Self, ExtractError> {
        let layout = RowLayout::from_config(&config.layout)?;
        Ok(Self::new(layout).with_policy(config.extract.unchecked))
    }

    #[must_use]
    pub fn with_policy(mut self, policy: UncheckedPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn layout(&self) -> &RowLayout {
        &self.layout
    }

    #[must_use]
    pub const fn policy(&self) -> UncheckedPolicy {
        self.policy
    }

    /// Resolve one row into its typed name, control kind and value.
    #[must_use]
    pub fn resolve(&self, row: ElementRef<'_>) -> ResolvedAttribute {
        let name = name::resolve(&self.layout, row);
        let (control, value) = value::resolve(&self.layout, row);
        tracing::debug!(
            name = %name,
            source = %name.source(),
            control = %control,
            resolved = value.is_resolved(),
            "resolved attribute row"
        );
        ResolvedAttribute {
            name,
            control,
            value,
        }
    }

    /// Extract the single-entry `{name: values}` mapping for one row.
    #[must_use]
    pub fn extract(&self, row: ElementRef<'_>) -> ExtractionResult {
        self.resolve(row).into_result(self.policy)
    }

    /// Flat report for one row.
    #[must_use]
    pub fn report(&self, row: ElementRef<'_>) -> RowReport {
        self.resolve(row).into_report(self.policy)
    }

    /// Every row of `document` matched by the layout's row selector, in
    /// document order.
    pub fn rows<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        document.select(&self.layout.row)
    }

    /// Extract every row of `document` and merge the results in order.
    ///
    /// When two rows resolve to the same name the later one wins and keeps
    /// the earlier one's position.
    #[must_use]
    pub fn extract_document(&self, document: &Html) -> AttributeTable {
        let mut table = AttributeTable::new();
        let mut rows = 0usize;
        for row in self.rows(document) {
            rows += 1;
            let result = self.extract(row);
            let name = result.name().to_string();
            if let Some(previous) = table.merge(result) {
                tracing::debug!(%name, ?previous, "later row overrides earlier value");
            }
        }
        self.log_scan(rows, table.len());
        table
    }

    /// Report every row of `document`, one entry per row (no merging).
    #[must_use]
    pub fn report_document(&self, document: &Html) -> Vec<RowReport> {
        let reports: Vec<RowReport> = self.rows(document).map(|row| self.report(row)).collect();
        self.log_scan(reports.len(), reports.len());
        reports
    }

    fn log_scan(&self, rows: usize, attributes: usize) {
        if rows == 0 {
            tracing::warn!(
                selector = self.layout.row_selector(),
                "row selector matched nothing"
            );
        } else {
            tracing::debug!(rows, attributes, "scanned document");
        }
    }
}

#[cfg(test)]
mod tests;
