//! Share surface port
//!
//! Hands formatted quote text to whatever share affordance the host offers.

use quotegen_domain::{ShareRequest, ShareTarget};
use thiserror::Error;

/// Errors that can occur when sharing a quote
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// Share was requested before any quote was generated.
    #[error("You first need to generate a quote!")]
    NothingToShare,

    /// Every available target is excluded or missing.
    #[error("No share target available")]
    NoTargetAvailable,

    #[error("Sharing via {target} failed: {message}")]
    Failed { target: ShareTarget, message: String },
}

/// Port for the host's share affordance
pub trait SharePort: Send + Sync {
    /// Share the request's text, returning the target that received it
    fn share(&self, request: &ShareRequest) -> Result<ShareTarget, ShareError>;
}
