//! Result types handed back to callers.
//!
//! `ExtractionResult` is the single-entry `{name: values}` mapping produced
//! per row. `AttributeTable` is the caller-side aggregate of many of them.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::name::{AttributeName, NameSource};
use crate::value::{AttributeValue, ControlKind, UncheckedPolicy};

// ---------------------------------------------------------------------------
// ResolvedAttribute
// ---------------------------------------------------------------------------

/// Typed outcome of resolving one row: name, dispatched control and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute {
    pub name: AttributeName,
    pub control: ControlKind,
    pub value: AttributeValue,
}

impl ResolvedAttribute {
    /// Collapse into the string mapping, applying `policy` to empty groups.
    #[must_use]
    pub fn into_result(self, policy: UncheckedPolicy) -> ExtractionResult {
        ExtractionResult {
            name: self.name.into_string(),
            values: self.value.into_values(policy),
        }
    }

    #[must_use]
    pub fn into_report(self, policy: UncheckedPolicy) -> RowReport {
        RowReport {
            name_source: self.name.source(),
            name: self.name.into_string(),
            control: self.control,
            resolved: self.value.is_resolved(),
            values: self.value.into_values(policy),
        }
    }
}

// ---------------------------------------------------------------------------
// ExtractionResult
// ---------------------------------------------------------------------------

/// A single-entry mapping from attribute name to its ordered values.
///
/// Serializes as a JSON object with exactly one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractionResult {
    name: String,
    values: Vec<String>,
}

impl ExtractionResult {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of keys in the mapping. Always one.
    #[must_use]
    pub const fn len(&self) -> usize {
        1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.name, self.values)
    }
}

impl TryFrom<IndexMap<String, Vec<String>>> for ExtractionResult {
    type Error = CoreError;

    fn try_from(map: IndexMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(CoreError::EntryCount { found: map.len() });
        }
        let Some((name, values)) = map.into_iter().next() else {
            return Err(CoreError::EntryCount { found: 0 });
        };
        Ok(Self { name, values })
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.values)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExtractionResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SingleEntry;

        impl<'de> Visitor<'de> for SingleEntry {
            type Value = ExtractionResult;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with exactly one attribute")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = IndexMap::new();
                while let Some((name, values)) = access.next_entry::<String, Vec<String>>()? {
                    map.insert(name, values);
                }
                ExtractionResult::try_from(map).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(SingleEntry)
    }
}

impl JsonSchema for ExtractionResult {
    fn schema_name() -> Cow<'static, str> {
        "ExtractionResult".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Single-entry mapping from attribute name to its ordered values.",
            "type": "object",
            "minProperties": 1,
            "maxProperties": 1,
            "additionalProperties": {
                "type": "array",
                "items": { "type": "string" }
            }
        })
    }
}

// ---------------------------------------------------------------------------
// AttributeTable
// ---------------------------------------------------------------------------

/// Insertion-ordered aggregate of many extraction results.
///
/// A later result for an existing name replaces its values in place, so the
/// table keeps the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AttributeTable(IndexMap<String, Vec<String>>);

impl AttributeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one result, returning the values it replaced, if any.
    pub fn merge(&mut self, result: ExtractionResult) -> Option<Vec<String>> {
        let (name, values) = result.into_parts();
        self.0.insert(name, values)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.0
    }
}

impl Extend<ExtractionResult> for AttributeTable {
    fn extend<I: IntoIterator<Item = ExtractionResult>>(&mut self, iter: I) {
        for result in iter {
            self.merge(result);
        }
    }
}

impl FromIterator<ExtractionResult> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = ExtractionResult>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl IntoIterator for AttributeTable {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ---------------------------------------------------------------------------
// RowReport
// ---------------------------------------------------------------------------

/// Flat per-row view for detailed and tabular output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RowReport {
    pub name: String,
    pub name_source: NameSource,
    pub control: ControlKind,
    /// False when `values` holds a placeholder rather than a real value.
    pub resolved: bool,
    pub values: Vec<String>,
}
