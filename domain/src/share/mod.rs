//! Share request value objects
//!
//! The share surface itself lives outside the domain; this module only
//! describes what is shared and which targets must never be offered.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A destination the host may offer for shared text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShareTarget {
    /// System clipboard
    Clipboard,
    /// Print to standard output
    Stdout,
    AddToReadingList,
    OpenInEbookViewer,
    MarkupAsPdf,
}

/// Targets excluded from every share request unless configured otherwise
pub const DEFAULT_EXCLUDED_TARGETS: [ShareTarget; 3] = [
    ShareTarget::AddToReadingList,
    ShareTarget::OpenInEbookViewer,
    ShareTarget::MarkupAsPdf,
];

impl ShareTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareTarget::Clipboard => "clipboard",
            ShareTarget::Stdout => "stdout",
            ShareTarget::AddToReadingList => "add-to-reading-list",
            ShareTarget::OpenInEbookViewer => "open-in-ebook-viewer",
            ShareTarget::MarkupAsPdf => "markup-as-pdf",
        }
    }
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShareTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clipboard" => Ok(ShareTarget::Clipboard),
            "stdout" => Ok(ShareTarget::Stdout),
            "add-to-reading-list" => Ok(ShareTarget::AddToReadingList),
            "open-in-ebook-viewer" => Ok(ShareTarget::OpenInEbookViewer),
            "markup-as-pdf" => Ok(ShareTarget::MarkupAsPdf),
            _ => Err(DomainError::InvalidShareTarget(s.to_string())),
        }
    }
}

/// Text to share plus the targets that must not receive it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub text: String,
    pub excluded: Vec<ShareTarget>,
}

impl ShareRequest {
    /// Create a request with the default exclusion list
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            excluded: DEFAULT_EXCLUDED_TARGETS.to_vec(),
        }
    }

    pub fn with_excluded(mut self, excluded: Vec<ShareTarget>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Check if a target may receive this request
    pub fn allows(&self, target: ShareTarget) -> bool {
        !self.excluded.contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exclusions() {
        let request = ShareRequest::new("\"x\" - y");
        assert!(request.allows(ShareTarget::Clipboard));
        assert!(request.allows(ShareTarget::Stdout));
        assert!(!request.allows(ShareTarget::AddToReadingList));
        assert!(!request.allows(ShareTarget::OpenInEbookViewer));
        assert!(!request.allows(ShareTarget::MarkupAsPdf));
    }

    #[test]
    fn test_custom_exclusions() {
        let request = ShareRequest::new("t").with_excluded(vec![ShareTarget::Clipboard]);
        assert!(!request.allows(ShareTarget::Clipboard));
        assert!(request.allows(ShareTarget::MarkupAsPdf));
    }

    #[test]
    fn test_target_names_roundtrip() {
        for target in [
            ShareTarget::Clipboard,
            ShareTarget::Stdout,
            ShareTarget::AddToReadingList,
            ShareTarget::OpenInEbookViewer,
            ShareTarget::MarkupAsPdf,
        ] {
            assert_eq!(target.as_str().parse::<ShareTarget>(), Ok(target));
            let json = serde_json::to_string(&target).unwrap();
            assert_eq!(json, format!("\"{}\"", target.as_str()));
        }
    }
}
