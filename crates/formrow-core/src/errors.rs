//! Cross-cutting error types for formrow.
//!
//! Extraction itself never fails; these errors come from building or
//! decoding result types. Domain-specific errors (`ConfigError`,
//! `ExtractError`) live in their own crates and converge in `formrow-cli`.

use thiserror::Error;

/// Errors that can be raised by any formrow crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An extraction result must carry exactly one attribute.
    #[error("Extraction result must hold exactly one attribute, found {found}")]
    EntryCount { found: usize },

    /// A policy name did not match any known policy.
    #[error("Unknown unchecked-group policy '{0}' (expected 'preserve' or 'sentinel')")]
    UnknownPolicy(String),
}
