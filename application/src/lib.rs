//! Application layer for quotegen
//!
//! This crate contains use cases, port definitions, and the session state
//! that the front end drives. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger},
    progress::{FetchProgressNotifier, NoFetchProgress},
    remote_quotes::{FetchError, FetchOutcome, RemoteQuoteSource},
    share_target::{ShareError, SharePort},
};
pub use session::{quote_session::QuoteSession, remote_session::RemoteQuoteSession};
pub use use_cases::fetch_remote_quote::FetchRemoteQuoteUseCase;
pub use use_cases::share_quote::ShareQuoteUseCase;
