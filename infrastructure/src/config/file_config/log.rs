//! Activity log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};

/// Raw activity log configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL file receiving activity events; disabled when unset
    pub activity_file: Option<String>,
}
