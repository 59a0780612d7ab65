//! # formrow-extract
//!
//! Attribute name/value extraction from catalog admin form rows.
//!
//! A caller positions a [`scraper::ElementRef`] on one row (label cell +
//! value cell) and gets back a single-entry `{name: values}` mapping:
//!
//! ```
//! use formrow_extract::{AttributeExtractor, parse_row, row_root};
//!
//! let doc = parse_row(
//!     r#"<tr><td class="label"><label for="color">Color</label></td>
//!        <td class="value"><input type="text" value="Blue"></td></tr>"#,
//! );
//! let extractor = AttributeExtractor::magento().expect("built-in layout");
//! let result = extractor.extract(row_root(&doc));
//! assert_eq!(result.name(), "color");
//! assert_eq!(result.values(), ["Blue"]);
//! ```
//!
//! [`AttributeExtractor::extract_document`] scans a whole page with the
//! layout's row selector and merges the rows into an `AttributeTable`.

mod document;
mod error;
mod extractor;
mod layout;

pub use document::{parse_document, parse_row, read_document, row_root};
pub use error::ExtractError;
pub use extractor::AttributeExtractor;
pub use layout::RowLayout;
