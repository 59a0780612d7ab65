//! Row layout selectors.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Rows of a Magento-style product edit form.
pub const DEFAULT_ROW_SELECTOR: &str = "table.form-list tr";
pub const DEFAULT_LABEL_SELECTOR: &str = "td.label";
pub const DEFAULT_VALUE_SELECTOR: &str = "td.value";

fn default_row_selector() -> String {
    DEFAULT_ROW_SELECTOR.to_string()
}

fn default_label_selector() -> String {
    DEFAULT_LABEL_SELECTOR.to_string()
}

fn default_value_selector() -> String {
    DEFAULT_VALUE_SELECTOR.to_string()
}

/// CSS selectors describing where rows, label cells and value cells live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Selects each attribute row within a full document.
    #[serde(default = "default_row_selector")]
    pub row_selector: String,

    /// Selects the label cell within a row.
    #[serde(default = "default_label_selector")]
    pub label_selector: String,

    /// Selects the value cell within a row.
    #[serde(default = "default_value_selector")]
    pub value_selector: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_selector: default_row_selector(),
            label_selector: default_label_selector(),
            value_selector: default_value_selector(),
        }
    }
}

impl LayoutConfig {
    /// Reject blank selectors. Syntax is checked when the layout is compiled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("layout.row_selector", &self.row_selector),
            ("layout.label_selector", &self.label_selector),
            ("layout.value_selector", &self.value_selector),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "selector must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
