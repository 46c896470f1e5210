//! Remote quote source port
//!
//! Defines the interface for fetching quote/author pairs from an external
//! quote API. The HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use quotegen_domain::RemoteQuote;
use thiserror::Error;

/// Errors that can occur while fetching remote quotes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The API answered with an empty array.
    #[error("The quote service returned no quotes.")]
    EmptyResponse,

    /// Connection failure or non-success HTTP status.
    #[error("Could not reach the quote service: {0}")]
    Transport(String),

    /// The body was not a JSON array of `{quote, author}` objects.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Result of one fetch, as delivered back to the front end
pub type FetchOutcome = Result<RemoteQuote, FetchError>;

/// Source of remote quotes
///
/// One call issues exactly one request. Implementations must not retry,
/// cache or time out on their own.
#[async_trait]
pub trait RemoteQuoteSource: Send + Sync {
    /// Fetch and decode the full response array
    async fn fetch_quotes(&self) -> Result<Vec<RemoteQuote>, FetchError>;

    /// Human-readable location of the source, for logs and progress
    fn describe(&self) -> String;
}
