//! Attribute values, control kinds and the sentinel strings they degrade to.
//!
//! Every unrecognized or absent shape is carried as data (`Unresolved`)
//! rather than as an error. Callers that only want strings use
//! [`AttributeValue::into_values`]; callers that want to tell a real value
//! from a placeholder match on the variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Sentinel for an `input` whose `type` is neither text, checkbox nor radio.
pub const UNKNOWN_INPUT_TYPE: &str = "Unknown type of input";

/// Sentinel for a `select` with no `option` marked selected.
pub const NO_OPTION_SELECTED: &str = "No option selected";

/// Sentinel for a value cell holding no input, textarea or select.
pub const UNKNOWN_ATTRIBUTE_TYPE: &str = "Unknown attribute type";

/// Sentinel for a checkbox/radio group with nothing checked, used only under
/// [`UncheckedPolicy::Sentinel`].
pub const NONE_SELECTED: &str = "None selected";

// ---------------------------------------------------------------------------
// ControlKind
// ---------------------------------------------------------------------------

/// The control element that value resolution dispatched on.
///
/// Precedence is `Input` > `TextArea` > `Select` > `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Input,
    #[serde(rename = "textarea")]
    TextArea,
    Select,
    None,
}

impl ControlKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::TextArea => "textarea",
            Self::Select => "select",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Unresolved
// ---------------------------------------------------------------------------

/// Why a row produced a placeholder instead of a real value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unresolved {
    /// The first input's `type` (if any) is not text, checkbox or radio.
    UnknownInputType(Option<String>),
    /// A select exists but no option is marked selected.
    NoOptionSelected,
    /// None of input, textarea or select exists in the value cell.
    UnknownAttributeType,
}

impl Unresolved {
    /// The fixed placeholder string for this reason.
    #[must_use]
    pub const fn sentinel(&self) -> &'static str {
        match self {
            Self::UnknownInputType(_) => UNKNOWN_INPUT_TYPE,
            Self::NoOptionSelected => NO_OPTION_SELECTED,
            Self::UnknownAttributeType => UNKNOWN_ATTRIBUTE_TYPE,
        }
    }
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownInputType(Some(kind)) => write!(f, "{} ({kind})", self.sentinel()),
            other => f.write_str(other.sentinel()),
        }
    }
}

// ---------------------------------------------------------------------------
// UncheckedPolicy
// ---------------------------------------------------------------------------

/// What a checkbox/radio group with nothing checked turns into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UncheckedPolicy {
    /// Keep the empty sequence.
    #[default]
    Preserve,
    /// Replace the empty sequence with `["None selected"]`.
    Sentinel,
}

impl UncheckedPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Sentinel => "sentinel",
        }
    }
}

impl fmt::Display for UncheckedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UncheckedPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "sentinel" => Ok(Self::Sentinel),
            _ => Err(CoreError::UnknownPolicy(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// AttributeValue
// ---------------------------------------------------------------------------

/// The value carried by one form row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// Free text from a text input or a textarea.
    Text(String),
    /// `value` of each checked checkbox/radio, in document order.
    MultiSelect(Vec<String>),
    /// Text of the selected option of a select.
    SingleSelect(String),
    Unresolved(Unresolved),
}

impl AttributeValue {
    /// Flatten into the ordered string sequence callers consume.
    ///
    /// Scalars become one-element sequences. A multi-select is returned as
    /// is, unless it is empty and `policy` asks for a sentinel.
    #[must_use]
    pub fn into_values(self, policy: UncheckedPolicy) -> Vec<String> {
        match self {
            Self::Text(value) | Self::SingleSelect(value) => vec![value],
            Self::MultiSelect(values) if values.is_empty() => match policy {
                UncheckedPolicy::Preserve => values,
                UncheckedPolicy::Sentinel => vec![NONE_SELECTED.to_string()],
            },
            Self::MultiSelect(values) => values,
            Self::Unresolved(reason) => vec![reason.sentinel().to_string()],
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }

    #[must_use]
    pub const fn unresolved(&self) -> Option<&Unresolved> {
        match self {
            Self::Unresolved(reason) => Some(reason),
            _ => None,
        }
    }
}
