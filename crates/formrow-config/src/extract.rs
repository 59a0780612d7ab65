//! Extraction behavior settings.

use formrow_core::UncheckedPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// What a checkbox/radio group with nothing checked yields.
    /// `preserve` keeps the empty list; `sentinel` yields `["None selected"]`.
    #[serde(default)]
    pub unchecked: UncheckedPolicy,
}
