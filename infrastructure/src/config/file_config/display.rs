//! Display preferences from TOML (`[display]` section)

use serde::{Deserialize, Serialize};

/// Raw display preferences from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDisplayConfig {
    /// Use the dark console palette
    pub dark_mode: bool,
}
