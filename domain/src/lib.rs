//! Domain layer for quotegen
//!
//! This crate contains the quote catalog, the filter engine and the random
//! selector. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! - **Quote**: a local text/author/category record, held by the [`QuoteStore`]
//! - **RemoteQuote**: a quote/author pair decoded from the remote quote API
//!
//! ## Filtering and Selection
//!
//! - **QuoteFilter**: length bucket × creator category × creator-name substring
//! - **select**: uniform random pick with a `NoMatches` error and an
//!   `OnlyOneMatch` notice

pub mod config;
pub mod core;
pub mod filter;
pub mod quote;
pub mod selection;
pub mod share;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, notice::Notice};
pub use filter::{FilterOutcome, QuoteFilter};
pub use quote::{
    category::CreatorCategory,
    entities::{Quote, RemoteQuote},
    length::{LengthBucket, LengthFilter},
    seed::seed_quotes,
    store::QuoteStore,
};
pub use selection::{Selection, select};
pub use share::{DEFAULT_EXCLUDED_TARGETS, ShareRequest, ShareTarget};
