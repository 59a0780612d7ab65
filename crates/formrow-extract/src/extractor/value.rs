use formrow_core::{AttributeValue, ControlKind, Unresolved};
use scraper::ElementRef;

use super::helpers::{attr_or_empty, in_value_cells, trimmed_text};
use crate::layout::RowLayout;

/// How an `input` element's `type` is interpreted.
#[derive(Debug, PartialEq, Eq)]
enum InputKind {
    Text,
    /// `checkbox` or `radio`: a group whose checked members are the value.
    Choice,
    Other(Option<String>),
}

impl InputKind {
    fn of(input: ElementRef<'_>) -> Self {
        match input.value().attr("type") {
            Some(kind) if kind.trim().eq_ignore_ascii_case("text") => Self::Text,
            Some(kind)
                if kind.trim().eq_ignore_ascii_case("checkbox")
                    || kind.trim().eq_ignore_ascii_case("radio") =>
            {
                Self::Choice
            }
            other => Self::Other(other.map(ToString::to_string)),
        }
    }
}

/// Resolve a row's value by dispatching on the first control kind found.
///
/// Precedence is input > textarea > select; the first input decides how all
/// inputs of the row are read.
pub(super) fn resolve(layout: &RowLayout, row: ElementRef<'_>) -> (ControlKind, AttributeValue) {
    if let Some(input) = in_value_cells(layout, row, &layout.input).next() {
        return (ControlKind::Input, input_value(layout, row, input));
    }

    if let Some(textarea) = in_value_cells(layout, row, &layout.textarea).next() {
        tracing::trace!("textarea control");
        return (ControlKind::TextArea, AttributeValue::Text(trimmed_text(textarea)));
    }

    if in_value_cells(layout, row, &layout.select).next().is_some() {
        return (ControlKind::Select, select_value(layout, row));
    }

    tracing::trace!("no recognized control in value cell");
    (
        ControlKind::None,
        AttributeValue::Unresolved(Unresolved::UnknownAttributeType),
    )
}

fn input_value(layout: &RowLayout, row: ElementRef<'_>, first: ElementRef<'_>) -> AttributeValue {
    match InputKind::of(first) {
        InputKind::Text => {
            tracing::trace!("text input");
            AttributeValue::Text(attr_or_empty(first, "value"))
        }
        InputKind::Choice => {
            let checked: Vec<String> = in_value_cells(layout, row, &layout.input)
                .filter(|input| input.value().attr("checked").is_some())
                .map(|input| attr_or_empty(input, "value"))
                .collect();
            tracing::trace!(checked = checked.len(), "checkbox/radio group");
            AttributeValue::MultiSelect(checked)
        }
        InputKind::Other(kind) => {
            tracing::trace!(kind = kind.as_deref().unwrap_or("<none>"), "unknown input type");
            AttributeValue::Unresolved(Unresolved::UnknownInputType(kind))
        }
    }
}

/// First selected option across every select of the row's value cells.
fn select_value(layout: &RowLayout, row: ElementRef<'_>) -> AttributeValue {
    let selected = in_value_cells(layout, row, &layout.select)
        .flat_map(|select| select.select(&layout.selected_option))
        .next();
    match selected {
        Some(option) => {
            tracing::trace!("select with selected option");
            AttributeValue::SingleSelect(trimmed_text(option))
        }
        None => {
            tracing::trace!("select without selected option");
            AttributeValue::Unresolved(Unresolved::NoOptionSelected)
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    fn input_kind(markup: &str) -> InputKind {
        let doc = Html::parse_fragment(markup);
        let input = Selector::parse("input").unwrap();
        InputKind::of(doc.select(&input).next().expect("input in markup"))
    }

    #[test]
    fn input_type_is_case_insensitive() {
        assert_eq!(input_kind(r#"<input type="TEXT">"#), InputKind::Text);
        assert_eq!(input_kind(r#"<input type="Checkbox">"#), InputKind::Choice);
        assert_eq!(input_kind(r#"<input type="radio">"#), InputKind::Choice);
    }

    #[test]
    fn missing_type_is_unknown() {
        assert_eq!(input_kind("<input value=\"x\">"), InputKind::Other(None));
    }

    #[test]
    fn other_types_keep_their_name() {
        assert_eq!(
            input_kind(r#"<input type="hidden">"#),
            InputKind::Other(Some("hidden".into()))
        );
    }
}
