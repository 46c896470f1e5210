//! Progress notification port
//!
//! Defines the interface for reporting progress of a remote fetch.

/// Callback for progress updates during a remote fetch
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait FetchProgressNotifier: Send + Sync {
    /// Called right before the request is sent
    fn on_fetch_start(&self, source: &str);

    /// Called once the request finished, successfully or not
    fn on_fetch_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoFetchProgress;

impl FetchProgressNotifier for NoFetchProgress {
    fn on_fetch_start(&self, _source: &str) {}
    fn on_fetch_complete(&self, _success: bool) {}
}
