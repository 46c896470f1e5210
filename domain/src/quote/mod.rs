//! Quote catalog
//!
//! - [`entities::Quote`] / [`entities::RemoteQuote`]: the two quote records
//! - [`category::CreatorCategory`]: creator classification and filter
//! - [`length::LengthFilter`]: length bucket filter
//! - [`store::QuoteStore`]: append-only in-memory catalog

pub mod category;
pub mod entities;
pub mod length;
pub mod seed;
pub mod store;
