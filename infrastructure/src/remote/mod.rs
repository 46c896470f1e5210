//! Remote quote API adapter

mod http_source;

pub use http_source::{DEFAULT_ENDPOINT, HttpRemoteQuoteSource};
