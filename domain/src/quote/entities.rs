//! Quote entities

use super::category::CreatorCategory;
use super::length::LengthBucket;
use serde::{Deserialize, Serialize};

/// A locally stored quote (Entity)
///
/// Immutable once created; the catalog never edits or removes quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    text: String,
    category: CreatorCategory,
    creator_name: String,
}

impl Quote {
    /// Create a new quote. Any string is accepted, including empty ones.
    pub fn new(
        text: impl Into<String>,
        category: CreatorCategory,
        creator_name: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            category,
            creator_name: creator_name.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> CreatorCategory {
        self.category
    }

    pub fn creator_name(&self) -> &str {
        &self.creator_name
    }

    /// Length bucket of the quote text
    pub fn length_bucket(&self) -> LengthBucket {
        LengthBucket::of(&self.text)
    }

    /// Text handed to the share surface: `"<text>" - <creator>`
    pub fn share_text(&self) -> String {
        format!("\"{}\" - {}", self.text, self.creator_name)
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.share_text())
    }
}

/// A quote/author pair decoded from the remote quote API
///
/// Ephemeral: lives for one fetch response and is replaced by the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteQuote {
    pub quote: String,
    pub author: String,
}

impl RemoteQuote {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }

    pub fn share_text(&self) -> String {
        format!("\"{}\" - {}", self.quote, self.author)
    }
}
