use formrow_core::{AttributeName, AttributeValue, ControlKind, ExtractionResult, Unresolved};
use pretty_assertions::assert_eq;
use scraper::Html;

use super::*;
use crate::document::{parse_row, row_root};

mod choices;
mod textareas;

const FIXTURE: &str = include_str!("../../../tests/fixtures/product_edit.html");

fn extractor() -> AttributeExtractor {
    AttributeExtractor::magento().expect("built-in layout compiles")
}

/// Extract a single row given as bare `<tr>` markup.
fn extract_row(markup: &str) -> ExtractionResult {
    let doc = parse_row(markup);
    extractor().extract(row_root(&doc))
}

fn resolve_row(markup: &str) -> ResolvedAttribute {
    let doc = parse_row(markup);
    extractor().resolve(row_root(&doc))
}

fn values(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn result_always_has_one_key() {
    let doc = Html::parse_document(FIXTURE);
    let extractor = extractor();
    for row in extractor.rows(&doc) {
        let json = serde_json::to_value(extractor.extract(row)).unwrap();
        assert_eq!(json.as_object().map(serde_json::Map::len), Some(1));
    }
}

#[test]
fn values_non_empty_except_unchecked_groups() {
    let doc = Html::parse_document(FIXTURE);
    let extractor = extractor();
    for row in extractor.rows(&doc) {
        let resolved = extractor.resolve(row);
        let empty_group = matches!(&resolved.value, AttributeValue::MultiSelect(v) if v.is_empty());
        let result = resolved.into_result(extractor.policy());
        assert_eq!(result.values().is_empty(), empty_group, "row {}", result.name());
    }
}

#[test]
fn extraction_is_idempotent() {
    let doc = Html::parse_document(FIXTURE);
    let extractor = extractor();
    for row in extractor.rows(&doc) {
        assert_eq!(extractor.extract(row), extractor.extract(row));
    }
}

#[test]
fn extractor_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AttributeExtractor>();
}

#[test]
fn resolve_reports_control_kind() {
    let resolved = resolve_row(
        r#"<tr><td class="label">Notes</td><td class="value"><textarea>hi</textarea></td></tr>"#,
    );
    assert_eq!(resolved.name, AttributeName::Label("Notes".into()));
    assert_eq!(resolved.control, ControlKind::TextArea);
    assert_eq!(resolved.value, AttributeValue::Text("hi".into()));
}
