use formrow_core::{AttributeTable, ExtractionResult, RowReport};
use schemars::{Schema, schema_for};

use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `formrow schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.kind), flags.format.unwrap_or(OutputFormat::Json))
}

/// JSON Schema for the output shape named by `kind`.
pub fn schema(kind: SchemaKind) -> Schema {
    match kind {
        SchemaKind::Table => schema_for!(AttributeTable),
        SchemaKind::Row => schema_for!(ExtractionResult),
        SchemaKind::Report => schema_for!(RowReport),
    }
}

#[cfg(test)]
mod tests {
    use super::schema;
    use crate::cli::root_commands::SchemaKind;

    #[test]
    fn row_schema_allows_exactly_one_key() {
        let value = schema(SchemaKind::Row).to_value();
        assert_eq!(value["type"], "object");
        assert_eq!(value["minProperties"], 1);
        assert_eq!(value["maxProperties"], 1);
    }

    #[test]
    fn table_schema_maps_names_to_string_lists() {
        let value = schema(SchemaKind::Table).to_value();
        assert_eq!(value["type"], "object");
        assert_eq!(value["additionalProperties"]["type"], "array");
        assert_eq!(value["additionalProperties"]["items"]["type"], "string");
    }

    #[test]
    fn report_schema_lists_fields() {
        let value = schema(SchemaKind::Report).to_value();
        let properties = value["properties"].as_object().expect("report properties");
        for field in ["name", "name_source", "control", "resolved", "values"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }
}
