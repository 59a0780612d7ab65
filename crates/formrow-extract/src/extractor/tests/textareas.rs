use pretty_assertions::assert_eq;

use super::*;

#[test]
fn textarea_text_is_trimmed() {
    let result = extract_row(
        r#"<tr><td class="label"><label for="short_description">Short</label></td>
           <td class="value"><textarea>   A short one.   </textarea></td></tr>"#,
    );
    assert_eq!(
        result,
        ExtractionResult::new("short_description", values(&["A short one."]))
    );
}

#[test]
fn textarea_keeps_inner_line_breaks() {
    let result = extract_row(
        "<tr><td class=\"label\">Body</td><td class=\"value\"><textarea>\nline one\nline two\n</textarea></td></tr>",
    );
    assert_eq!(result.values(), values(&["line one\nline two"]));
}

#[test]
fn empty_textarea_is_empty_string() {
    let result = extract_row(
        r#"<tr><td class="label">Body</td><td class="value"><textarea></textarea></td></tr>"#,
    );
    assert_eq!(result.values(), values(&[""]));
}

#[test]
fn textarea_takes_precedence_over_select() {
    let resolved = resolve_row(
        r#"<tr><td class="label">Body</td><td class="value">
             <select><option selected>Large</option></select>
             <textarea>text wins</textarea>
           </td></tr>"#,
    );
    assert_eq!(resolved.control, ControlKind::TextArea);
    assert_eq!(resolved.value, AttributeValue::Text("text wins".into()));
}
