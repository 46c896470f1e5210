//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Interactive mode settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while remote fetches run
    pub show_progress: bool,
    /// Line history location; `~/` is expanded. Defaults to the data dir.
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_repl_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.repl.show_progress);
        assert!(config.repl.history_file.is_none());
    }

    #[test]
    fn test_repl_overrides() {
        let toml_str = r#"
[repl]
show_progress = false
history_file = "~/.quotegen_history"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("~/.quotegen_history")
        );
    }
}
