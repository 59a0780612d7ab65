use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table::TableOptions::from_env();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        // Attribute order is document order; keep it.
        Value::Object(map) => {
            if map.is_empty() {
                return Ok(String::from("(no attributes)"));
            }
            let headers = ["attribute", "values"];
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    // Columns in first-seen field order.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.is_empty() => String::from("-"),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use formrow_core::{AttributeTable, ControlKind, ExtractionResult, NameSource, RowReport};
    use pretty_assertions::assert_eq;

    use super::render;
    use crate::cli::OutputFormat;

    fn table() -> AttributeTable {
        [
            ExtractionResult::new("sku", vec![String::from("TEE-01")]),
            ExtractionResult::new("channels", vec![String::from("web"), String::from("b2b")]),
            ExtractionResult::new("featured", Vec::new()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn json_render_keeps_document_order() {
        let out = render(&table(), OutputFormat::Json).expect("json render should work");
        let sku = out.find("\"sku\"").expect("sku key");
        let channels = out.find("\"channels\"").expect("channels key");
        let featured = out.find("\"featured\"").expect("featured key");
        assert!(sku < channels && channels < featured);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&table(), OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"{"sku":["TEE-01"],"channels":["web","b2b"],"featured":[]}"#);
    }

    #[test]
    fn table_render_joins_values() {
        let out = render(&table(), OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("attribute"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("sku"));
        assert!(lines[3].contains("web, b2b"));
        assert!(lines[4].trim_end().ends_with('-'));
    }

    #[test]
    fn empty_table_renders_placeholder() {
        let out = render(&AttributeTable::new(), OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no attributes)");
    }

    #[test]
    fn report_table_uses_field_order_for_columns() {
        let reports = vec![RowReport {
            name: String::from("color"),
            name_source: NameSource::Reference,
            control: ControlKind::Select,
            resolved: true,
            values: vec![String::from("Blue")],
        }];

        let out = render(&reports, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let columns: Vec<&str> = header.split_whitespace().collect();
        assert_eq!(columns, ["name", "name_source", "control", "resolved", "values"]);
        assert!(out.contains("reference"));
    }
}
