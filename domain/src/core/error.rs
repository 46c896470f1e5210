//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The filter left nothing to select from.
    #[error("No quotes available for the selected criteria.")]
    NoMatches,

    #[error("Invalid creator category: {0}")]
    InvalidCategory(String),

    #[error("Invalid length filter: {0}")]
    InvalidLengthFilter(String),

    #[error("Invalid share target: {0}")]
    InvalidShareTarget(String),
}
