use formrow_core::AttributeName;
use scraper::ElementRef;

use super::helpers::trimmed_text;
use crate::layout::RowLayout;

/// Resolve a row's name: `for` reference > label cell text > sentinel.
pub(super) fn resolve(layout: &RowLayout, row: ElementRef<'_>) -> AttributeName {
    let Some(cell) = row.select(&layout.label_cell).next() else {
        tracing::trace!("no label cell");
        return AttributeName::Unknown;
    };

    // First label element only.
    let reference = row
        .select(&layout.label_cell)
        .flat_map(|cell| cell.select(&layout.label))
        .next()
        .and_then(|label| label.value().attr("for"))
        .map(str::trim)
        .filter(|target| !target.is_empty());

    if let Some(target) = reference {
        tracing::trace!(reference = target, "label references control");
        return AttributeName::Reference(target.to_string());
    }

    AttributeName::Label(trimmed_text(cell))
}
