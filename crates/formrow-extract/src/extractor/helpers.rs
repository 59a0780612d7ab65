use scraper::{ElementRef, Selector};

use crate::layout::RowLayout;

/// Every element matching `control` inside a value cell of `row`, once each,
/// in document order. Nested value cells do not repeat their controls.
pub(super) fn in_value_cells<'a>(
    layout: &'a RowLayout,
    row: ElementRef<'a>,
    control: &'a Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    row.select(control)
        .filter(move |element| within_value_cell(layout, row, *element))
}

/// Whether some ancestor of `element`, strictly below `row`, is a value cell.
fn within_value_cell(layout: &RowLayout, row: ElementRef<'_>, element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .take_while(|node| node.id() != row.id())
        .filter_map(ElementRef::wrap)
        .any(|ancestor| layout.value_cell.matches(&ancestor))
}

/// Attribute value, or an empty string when the attribute is absent.
pub(super) fn attr_or_empty(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// Text content with surrounding whitespace trimmed, inner layout kept.
pub(super) fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
