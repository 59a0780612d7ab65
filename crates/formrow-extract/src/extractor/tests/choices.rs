use formrow_core::UncheckedPolicy;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn only_checked_checkbox_values() {
    let result = extract_row(
        r#"<tr><td class="label">Letters</td><td class="value">
             <input type="checkbox" value="A">
             <input type="checkbox" value="B" checked="checked">
           </td></tr>"#,
    );
    assert_eq!(result.values(), values(&["B"]));
}

#[test]
fn checked_values_keep_document_order() {
    let result = extract_row(
        r#"<tr><td class="label">Letters</td><td class="value">
             <input type="checkbox" value="C" checked>
             <input type="checkbox" value="A">
             <input type="checkbox" value="B" checked="">
           </td></tr>"#,
    );
    assert_eq!(result.values(), values(&["C", "B"]));
}

#[test]
fn radio_group_selected_value() {
    let resolved = resolve_row(
        r#"<tr><td class="label"><label for="status">Status</label></td><td class="value">
             <input type="radio" name="s" value="1">
             <input type="radio" name="s" value="2" checked="checked">
           </td></tr>"#,
    );
    assert_eq!(resolved.control, ControlKind::Input);
    assert_eq!(resolved.value, AttributeValue::MultiSelect(values(&["2"])));
}

#[test]
fn checked_input_without_value_reads_empty() {
    let result = extract_row(
        r#"<tr><td class="label">Flag</td><td class="value"><input type="checkbox" checked></td></tr>"#,
    );
    assert_eq!(result.values(), values(&[""]));
}

// Nothing checked: the values sequence is empty unless the sentinel policy is on.
#[test]
fn all_unchecked_group_is_empty_by_default() {
    let result = extract_row(
        r#"<tr><td class="label">Letters</td><td class="value">
             <input type="checkbox" value="A">
             <input type="checkbox" value="B">
           </td></tr>"#,
    );
    assert_eq!(result.name(), "Letters");
    assert!(result.values().is_empty());
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({ "Letters": [] })
    );
}

#[test]
fn all_unchecked_group_with_sentinel_policy() {
    let doc = parse_row(
        r#"<tr><td class="label">Letters</td><td class="value">
             <input type="radio" value="A"><input type="radio" value="B">
           </td></tr>"#,
    );
    let extractor = extractor().with_policy(UncheckedPolicy::Sentinel);
    let result = extractor.extract(row_root(&doc));
    assert_eq!(result.values(), values(&["None selected"]));
}

#[test]
fn sentinel_policy_leaves_checked_groups_alone() {
    let doc = parse_row(
        r#"<tr><td class="label">Letters</td><td class="value">
             <input type="checkbox" value="A" checked>
           </td></tr>"#,
    );
    let extractor = extractor().with_policy(UncheckedPolicy::Sentinel);
    assert_eq!(extractor.extract(row_root(&doc)).values(), values(&["A"]));
}

#[test]
fn nested_value_cells_yield_each_input_once() {
    let result = extract_row(
        r#"<tr><td class="label">Letters</td><td class="value">
             <table><tr><td class="value">
               <input type="checkbox" value="A" checked>
             </td></tr></table>
             <input type="checkbox" value="B" checked>
           </td></tr>"#,
    );
    assert_eq!(result.values(), values(&["A", "B"]));
}
