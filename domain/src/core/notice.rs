//! Informational notices
//!
//! A [`Notice`] is not an error: it rides along with an otherwise successful
//! filter or selection and is shown to the user next to the result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Informational message paired with a successful operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// Selection succeeded but there was exactly one candidate.
    OnlyOneMatch,
    /// A non-empty creator-name query matched no quotes.
    NoNameMatch,
}

impl Notice {
    /// The user-facing message for this notice
    pub fn message(&self) -> &'static str {
        match self {
            Notice::OnlyOneMatch => "There is only one quote. Add more quotes.",
            Notice::NoNameMatch => "No quotes found for the entered creator name.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Notice::OnlyOneMatch.to_string(),
            "There is only one quote. Add more quotes."
        );
        assert_eq!(
            Notice::NoNameMatch.to_string(),
            "No quotes found for the entered creator name."
        );
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&Notice::OnlyOneMatch).unwrap();
        assert_eq!(json, "\"only_one_match\"");
    }
}
