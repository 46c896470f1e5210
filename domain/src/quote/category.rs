//! Creator category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Creator classification of a quote.
///
/// The same type doubles as the creator filter: [`CreatorCategory::All`]
/// is the wildcard, every other variant matches by equality. A quote may
/// itself be tagged `All` (the add-quote form defaults to it); such a quote
/// only shows up when the filter is `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatorCategory {
    #[default]
    All,
    Poet,
    Engineer,
    Artist,
    Other,
}

impl CreatorCategory {
    /// Every variant, in picker order
    pub const ALL_VARIANTS: [CreatorCategory; 5] = [
        CreatorCategory::All,
        CreatorCategory::Poet,
        CreatorCategory::Engineer,
        CreatorCategory::Artist,
        CreatorCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatorCategory::All => "all",
            CreatorCategory::Poet => "poet",
            CreatorCategory::Engineer => "engineer",
            CreatorCategory::Artist => "artist",
            CreatorCategory::Other => "other",
        }
    }

    /// Check if this is the wildcard
    pub fn is_all(&self) -> bool {
        matches!(self, CreatorCategory::All)
    }

    /// Filter predicate: wildcard, or equality
    pub fn matches(&self, category: CreatorCategory) -> bool {
        self.is_all() || *self == category
    }
}

impl fmt::Display for CreatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CreatorCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "any" | "*" => Ok(CreatorCategory::All),
            "poet" => Ok(CreatorCategory::Poet),
            "engineer" => Ok(CreatorCategory::Engineer),
            "artist" => Ok(CreatorCategory::Artist),
            // "uncategorized" was the old name of `other`
            "other" | "uncategorized" => Ok(CreatorCategory::Other),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}
