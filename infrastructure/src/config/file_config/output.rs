//! Output configuration from TOML (`[output]` section)

use quotegen_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// How one-shot results are printed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `text` or `json`; `--output` takes precedence
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
