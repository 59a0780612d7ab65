//! Attribute names and where they were read from.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name used when a row carries no label cell at all.
pub const UNKNOWN_NAME: &str = "Unknown name";

/// The resolved name of one form row.
///
/// Admin markup sometimes renders the attribute code through a label's `for`
/// reference and sometimes only human-readable text. The reference is a
/// stable machine identifier, so it wins when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeName {
    /// `for` attribute of the label element inside the label cell.
    Reference(String),
    /// Trimmed text of the label cell.
    Label(String),
    /// No label cell was found.
    Unknown,
}

impl AttributeName {
    /// The string key this name contributes to a result mapping.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reference(name) | Self::Label(name) => name,
            Self::Unknown => UNKNOWN_NAME,
        }
    }

    #[must_use]
    pub const fn source(&self) -> NameSource {
        match self {
            Self::Reference(_) => NameSource::Reference,
            Self::Label(_) => NameSource::Label,
            Self::Unknown => NameSource::Unknown,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Reference(name) | Self::Label(name) => name,
            Self::Unknown => UNKNOWN_NAME.to_string(),
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which branch of name resolution produced an `AttributeName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NameSource {
    Reference,
    Label,
    Unknown,
}

impl NameSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Label => "label",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
