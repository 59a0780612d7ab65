//! # formrow-core
//!
//! Core types for formrow, shared by the extractor, config and CLI crates.
//!
//! This crate provides:
//! - `AttributeName`: where a row's name came from (`for` reference, label
//!   text, or nothing at all)
//! - `AttributeValue`: the tagged union over control kinds, with the
//!   `Unresolved` reasons that degrade to sentinel strings
//! - `ExtractionResult` and `AttributeTable`: the single-entry and
//!   aggregated string mappings handed back to callers
//! - `RowReport`: a flat per-row view used for tabular output
//! - Cross-cutting error types

pub mod errors;
pub mod name;
pub mod result;
pub mod value;

pub use errors::CoreError;
pub use name::{AttributeName, NameSource};
pub use result::{AttributeTable, ExtractionResult, ResolvedAttribute, RowReport};
pub use value::{AttributeValue, ControlKind, UncheckedPolicy, Unresolved};
