//! Share surface configuration from TOML (`[share]` section)

use quotegen_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_EXCLUDED_TARGETS, ShareTarget};
use serde::{Deserialize, Serialize};

const VALID_TARGETS: [&str; 5] = [
    "clipboard",
    "stdout",
    "add-to-reading-list",
    "open-in-ebook-viewer",
    "markup-as-pdf",
];

/// Raw share configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileShareConfig {
    /// Targets to try, in order of preference
    pub targets: Vec<String>,
    /// Targets that must never receive a quote
    pub excluded_targets: Vec<String>,
}

impl Default for FileShareConfig {
    fn default() -> Self {
        Self {
            targets: vec![
                ShareTarget::Clipboard.to_string(),
                ShareTarget::Stdout.to_string(),
            ],
            excluded_targets: DEFAULT_EXCLUDED_TARGETS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl FileShareConfig {
    /// Parse `targets`, skipping unknown names
    pub fn parse_targets(&self) -> (Vec<ShareTarget>, Vec<ConfigIssue>) {
        parse_target_list("share.targets", &self.targets)
    }

    /// Parse `excluded_targets`, skipping unknown names
    pub fn parse_excluded_targets(&self) -> (Vec<ShareTarget>, Vec<ConfigIssue>) {
        parse_target_list("share.excluded_targets", &self.excluded_targets)
    }
}

fn parse_target_list(field: &str, values: &[String]) -> (Vec<ShareTarget>, Vec<ConfigIssue>) {
    let mut targets = Vec::new();
    let mut issues = Vec::new();

    for value in values {
        match value.parse::<ShareTarget>() {
            Ok(target) => targets.push(target),
            Err(_) => issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: field.to_string(),
                    value: value.clone(),
                    valid_values: VALID_TARGETS.iter().map(|s| s.to_string()).collect(),
                },
                format!("{}: unknown share target '{}', ignoring", field, value),
            )),
        }
    }

    (targets, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_cleanly() {
        let config = FileShareConfig::default();
        let (targets, issues) = config.parse_targets();
        assert_eq!(targets, vec![ShareTarget::Clipboard, ShareTarget::Stdout]);
        assert!(issues.is_empty());

        let (excluded, issues) = config.parse_excluded_targets();
        assert_eq!(excluded, DEFAULT_EXCLUDED_TARGETS.to_vec());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_targets_are_skipped_with_warning() {
        let config = FileShareConfig {
            targets: vec!["stdout".to_string(), "fax".to_string()],
            excluded_targets: Vec::new(),
        };
        let (targets, issues) = config.parse_targets();
        assert_eq!(targets, vec![ShareTarget::Stdout]);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("fax"));
    }
}
