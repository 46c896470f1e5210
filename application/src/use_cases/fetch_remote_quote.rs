//! Fetch remote quote use case
//!
//! Issues one request through a [`RemoteQuoteSource`] and surfaces the first
//! quote of the response.
//!
//! # Delivery
//!
//! [`FetchRemoteQuoteUseCase::execute`] is a plain future. For front ends
//! that own their display state on a single loop,
//! [`FetchRemoteQuoteUseCase::dispatch`] runs the fetch on the tokio runtime
//! and sends the [`FetchOutcome`] back over a channel; the loop applies it
//! when it drains the receiver. If the receiver is gone by then, the
//! outcome is dropped.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::progress::{FetchProgressNotifier, NoFetchProgress};
use crate::ports::remote_quotes::{FetchError, FetchOutcome, RemoteQuoteSource};
use quotegen_domain::RemoteQuote;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Use case for fetching a single remote quote
pub struct FetchRemoteQuoteUseCase<S: RemoteQuoteSource + 'static> {
    source: Arc<S>,
    logger: Arc<dyn ActivityLogger>,
}

impl<S: RemoteQuoteSource + 'static> Clone for FetchRemoteQuoteUseCase<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<S: RemoteQuoteSource + 'static> FetchRemoteQuoteUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            logger: Arc::new(NoActivityLogger),
        }
    }

    /// Record fetch results to an activity log
    pub fn with_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Where fetches go, for progress display
    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Fetch one quote
    pub async fn execute(&self) -> FetchOutcome {
        self.execute_with_progress(&NoFetchProgress).await
    }

    /// Fetch one quote, reporting progress
    pub async fn execute_with_progress(
        &self,
        progress: &dyn FetchProgressNotifier,
    ) -> FetchOutcome {
        let source = self.source.describe();
        progress.on_fetch_start(&source);
        debug!("Fetching remote quotes from {}", source);

        let outcome = self
            .source
            .fetch_quotes()
            .await
            .and_then(first_quote);

        progress.on_fetch_complete(outcome.is_ok());
        self.record(&outcome);
        outcome
    }

    /// Run the fetch on the runtime and deliver the outcome through `tx`.
    ///
    /// Every call issues its own request; overlapping dispatches are not
    /// merged.
    pub fn dispatch(&self, tx: mpsc::UnboundedSender<FetchOutcome>) -> JoinHandle<()> {
        let use_case = self.clone();
        tokio::spawn(async move {
            let outcome = use_case.execute().await;
            if tx.send(outcome).is_err() {
                debug!("Fetch finished after its receiver went away; result dropped");
            }
        })
    }

    fn record(&self, outcome: &FetchOutcome) {
        match outcome {
            Ok(quote) => {
                info!("Fetched remote quote by {}", quote.author);
                self.logger.log(ActivityEvent::new(
                    "remote_fetched",
                    serde_json::json!({
                        "quote": quote.quote,
                        "author": quote.author,
                    }),
                ));
            }
            Err(e) => {
                warn!("Remote fetch failed: {}", e);
                self.logger.log(ActivityEvent::new(
                    "remote_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
            }
        }
    }
}

fn first_quote(quotes: Vec<RemoteQuote>) -> Result<RemoteQuote, FetchError> {
    quotes.into_iter().next().ok_or(FetchError::EmptyResponse)
}
