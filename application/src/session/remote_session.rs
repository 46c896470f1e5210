//! Remote quote session
//!
//! Display state of the remote quote screen. Outcomes arrive from
//! [`FetchRemoteQuoteUseCase::dispatch`](crate::FetchRemoteQuoteUseCase::dispatch)
//! and are applied here by the loop that owns the screen.

use crate::ports::remote_quotes::FetchOutcome;
use quotegen_domain::RemoteQuote;

/// State of the remote quote screen
#[derive(Debug, Default)]
pub struct RemoteQuoteSession {
    current: Option<RemoteQuote>,
    error: Option<String>,
    in_flight: usize,
}

impl RemoteQuoteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&RemoteQuote> {
        self.current.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of dispatched fetches whose outcome has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Note that a fetch was dispatched
    pub fn mark_dispatched(&mut self) {
        self.in_flight += 1;
    }

    /// Apply a finished fetch.
    ///
    /// Success replaces the displayed quote and clears the error. Failure
    /// only sets the error; the previously displayed quote stays.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            Ok(quote) => {
                self.current = Some(quote);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }
}
