//! Session state driven by the front end
//!
//! - [`quote_session::QuoteSession`]: local catalog, filters, displayed quote and messages
//! - [`remote_session::RemoteQuoteSession`]: last fetched remote quote and fetch error
//!
//! Both are owned by the single UI loop; nothing here is shared across threads.

pub mod quote_session;
pub mod remote_session;
