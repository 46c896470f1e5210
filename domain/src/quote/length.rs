//! Length bucket value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of the short bucket, in characters
pub const SHORT_MAX_CHARS: usize = 20;

/// Upper bound (inclusive) of the medium bucket, in characters
pub const MEDIUM_MAX_CHARS: usize = 50;

/// Length classification of a quote's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthBucket {
    Short,
    Medium,
    Large,
}

impl LengthBucket {
    /// Classify a text by its character count
    pub fn of(text: &str) -> Self {
        match text.chars().count() {
            n if n <= SHORT_MAX_CHARS => LengthBucket::Short,
            n if n <= MEDIUM_MAX_CHARS => LengthBucket::Medium,
            _ => LengthBucket::Large,
        }
    }
}

/// Length filter: a bucket, or the wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthFilter {
    #[default]
    All,
    Short,
    Medium,
    Large,
}

impl LengthFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthFilter::All => "all",
            LengthFilter::Short => "short",
            LengthFilter::Medium => "medium",
            LengthFilter::Large => "large",
        }
    }

    /// Check if this is the wildcard
    pub fn is_all(&self) -> bool {
        matches!(self, LengthFilter::All)
    }

    /// The bucket this filter selects, `None` for the wildcard
    pub fn bucket(&self) -> Option<LengthBucket> {
        match self {
            LengthFilter::All => None,
            LengthFilter::Short => Some(LengthBucket::Short),
            LengthFilter::Medium => Some(LengthBucket::Medium),
            LengthFilter::Large => Some(LengthBucket::Large),
        }
    }

    /// Filter predicate over a quote text
    pub fn matches(&self, text: &str) -> bool {
        match self.bucket() {
            None => true,
            Some(bucket) => LengthBucket::of(text) == bucket,
        }
    }
}

impl fmt::Display for LengthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LengthFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "any" | "*" => Ok(LengthFilter::All),
            "short" | "s" => Ok(LengthFilter::Short),
            "medium" | "m" => Ok(LengthFilter::Medium),
            "large" | "long" | "l" => Ok(LengthFilter::Large),
            _ => Err(DomainError::InvalidLengthFilter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(LengthBucket::of(""), LengthBucket::Short);
        assert_eq!(LengthBucket::of(&"a".repeat(20)), LengthBucket::Short);
        assert_eq!(LengthBucket::of(&"a".repeat(21)), LengthBucket::Medium);
        assert_eq!(LengthBucket::of(&"a".repeat(50)), LengthBucket::Medium);
        assert_eq!(LengthBucket::of(&"a".repeat(51)), LengthBucket::Large);
    }

    #[test]
    fn test_bucket_counts_chars_not_bytes() {
        // 20 two-byte characters are still short
        let text = "é".repeat(20);
        assert_eq!(text.len(), 40);
        assert_eq!(LengthBucket::of(&text), LengthBucket::Short);
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(LengthFilter::All.matches(""));
        assert!(LengthFilter::All.matches(&"x".repeat(500)));
    }

    #[test]
    fn test_filter_matches_bucket() {
        assert!(LengthFilter::Medium.matches(&"x".repeat(30)));
        assert!(!LengthFilter::Short.matches(&"x".repeat(30)));
        assert!(!LengthFilter::Large.matches(&"x".repeat(30)));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Short".parse::<LengthFilter>(), Ok(LengthFilter::Short));
        assert_eq!("long".parse::<LengthFilter>(), Ok(LengthFilter::Large));
        assert!("tiny".parse::<LengthFilter>().is_err());
    }
}
