//! Filter engine
//!
//! [`QuoteFilter`] composes three independent predicates over the catalog:
//!
//! 1. length bucket ([`LengthFilter`])
//! 2. creator category ([`CreatorCategory`], `All` is the wildcard)
//! 3. creator-name substring, case-insensitive (empty is the wildcard)
//!
//! Filtering is stable: the result is a subsequence of the input in its
//! original order. When a non-empty name query leaves nothing, the outcome
//! carries a [`Notice::NoNameMatch`] alongside the (empty) result.

use crate::core::notice::Notice;
use crate::quote::category::CreatorCategory;
use crate::quote::entities::Quote;
use crate::quote::length::LengthFilter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three filter predicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteFilter {
    pub length: LengthFilter,
    pub creator: CreatorCategory,
    pub name_query: String,
}

/// Result of applying a [`QuoteFilter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome<'a> {
    /// Matching quotes, in catalog order
    pub quotes: Vec<&'a Quote>,
    /// Set when a non-empty name query matched nothing
    pub notice: Option<Notice>,
}

impl FilterOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }
}

impl QuoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: LengthFilter) -> Self {
        self.length = length;
        self
    }

    pub fn with_creator(mut self, creator: CreatorCategory) -> Self {
        self.creator = creator;
        self
    }

    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    /// Check if no predicate is active
    pub fn is_unconstrained(&self) -> bool {
        self.length.is_all() && self.creator.is_all() && self.name_query.is_empty()
    }

    /// Test a single quote against all active predicates
    pub fn matches(&self, quote: &Quote) -> bool {
        self.length.matches(quote.text())
            && self.creator.matches(quote.category())
            && name_matches(&self.name_query, quote.creator_name())
    }

    /// Apply the filter to a catalog
    pub fn apply<'a>(&self, quotes: &'a [Quote]) -> FilterOutcome<'a> {
        let matched: Vec<&Quote> = quotes.iter().filter(|q| self.matches(q)).collect();

        let notice = if !self.name_query.is_empty() && matched.is_empty() {
            Some(Notice::NoNameMatch)
        } else {
            None
        };

        FilterOutcome {
            quotes: matched,
            notice,
        }
    }
}

impl fmt::Display for QuoteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "length={} creator={}", self.length, self.creator)?;
        if self.name_query.is_empty() {
            write!(f, " name=*")
        } else {
            write!(f, " name={:?}", self.name_query)
        }
    }
}

fn name_matches(query: &str, creator_name: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    creator_name
        .to_lowercase()
        .contains(&query.to_lowercase())
}
