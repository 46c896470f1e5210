//! HTTP adapter for the remote quote API
//!
//! Sends one plain `GET` (no parameters, headers or auth) and decodes a
//! JSON array of `{quote, author}` objects.

use async_trait::async_trait;
use quotegen_application::ports::remote_quotes::{FetchError, RemoteQuoteSource};
use quotegen_domain::RemoteQuote;
use tracing::debug;

/// Better Call Saul quote API
pub const DEFAULT_ENDPOINT: &str = "https://bcs-quotes.vercel.app/api/quotes";

/// [`RemoteQuoteSource`] backed by `reqwest`
pub struct HttpRemoteQuoteSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRemoteQuoteSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpRemoteQuoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl RemoteQuoteSource for HttpRemoteQuoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<RemoteQuote>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read response body: {}", e)))?;
        debug!("Received {} bytes from {}", body.len(), self.endpoint);

        serde_json::from_slice::<Vec<RemoteQuote>>(&body)
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn describe(&self) -> String {
        self.endpoint().to_string()
    }
}
