//! Compiled CSS selectors describing a form row.

use formrow_config::LayoutConfig;
use scraper::Selector;

use crate::error::ExtractError;

/// Where rows, label cells, value cells and their controls live.
///
/// Row, label cell and value cell selectors come from configuration. The
/// control selectors are fixed by HTML itself.
#[derive(Debug, Clone)]
pub struct RowLayout {
    row_source: String,
    pub(crate) row: Selector,
    pub(crate) label_cell: Selector,
    pub(crate) value_cell: Selector,
    pub(crate) label: Selector,
    pub(crate) input: Selector,
    pub(crate) textarea: Selector,
    pub(crate) select: Selector,
    pub(crate) selected_option: Selector,
}

impl RowLayout {
    /// The Magento product edit layout: `table.form-list tr` rows with
    /// `td.label` and `td.value` cells.
    ///
    /// # Errors
    /// Never in practice; the built-in selectors are valid.
    pub fn magento() -> Result<Self, ExtractError> {
        Self::from_config(&LayoutConfig::default())
    }

    /// Compile a layout from configured selector strings.
    ///
    /// # Errors
    /// Returns `ExtractError::InvalidSelector` naming the offending field.
    pub fn from_config(config: &LayoutConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            row_source: config.row_selector.clone(),
            row: compile("row", &config.row_selector)?,
            label_cell: compile("label cell", &config.label_selector)?,
            value_cell: compile("value cell", &config.value_selector)?,
            label: compile("label", "label")?,
            input: compile("input", "input")?,
            textarea: compile("textarea", "textarea")?,
            select: compile("select", "select")?,
            selected_option: compile("option", "option[selected]")?,
        })
    }

    /// Same layout with a different row selector.
    ///
    /// # Errors
    /// Returns `ExtractError::InvalidSelector` if `selector` does not parse.
    pub fn with_row_selector(mut self, selector: &str) -> Result<Self, ExtractError> {
        self.row = compile("row", selector)?;
        selector.clone_into(&mut self.row_source);
        Ok(self)
    }

    /// The row selector as written.
    #[must_use]
    pub fn row_selector(&self) -> &str {
        &self.row_source
    }
}

fn compile(field: &'static str, selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        field,
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
