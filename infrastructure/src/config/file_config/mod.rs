//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod display;
mod log;
mod output;
mod remote;
mod repl;
mod share;

pub use display::FileDisplayConfig;
pub use log::FileLogConfig;
pub use output::FileOutputConfig;
pub use remote::FileRemoteConfig;
pub use repl::FileReplConfig;
pub use share::FileShareConfig;

use quotegen_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote quote API settings
    pub remote: FileRemoteConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Share surface settings
    pub share: FileShareConfig,
    /// Display preferences
    pub display: FileDisplayConfig,
    /// Activity log settings
    pub log: FileLogConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues never abort loading; callers print them as warnings.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.remote.validate());
        issues.extend(self.share.parse_targets().1);
        issues.extend(self.share.parse_excluded_targets().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotegen_domain::{OutputFormat, ShareTarget};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[remote]
endpoint = "http://localhost:3000/api/quotes"

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/quotegen/history.txt"

[share]
targets = ["stdout"]
excluded_targets = ["markup-as-pdf"]

[display]
dark_mode = true

[log]
activity_file = "/tmp/quotegen.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.remote.endpoint, "http://localhost:3000/api/quotes");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(config.share.parse_targets().0, vec![ShareTarget::Stdout]);
        assert_eq!(
            config.share.parse_excluded_targets().0,
            vec![ShareTarget::MarkupAsPdf]
        );
        assert!(config.display.dark_mode);
        assert_eq!(
            config.log.activity_file.as_deref(),
            Some("/tmp/quotegen.jsonl")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[display]
dark_mode = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.display.dark_mode);
        // Defaults should apply
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert_eq!(config.share.parse_excluded_targets().0.len(), 3);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[remote]
endpoint = "ftp://example.com"

[share]
targets = ["carrier-pigeon"]
excluded_targets = ["smoke-signal"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 3);
    }
}
