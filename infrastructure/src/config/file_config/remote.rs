//! Remote API configuration from TOML (`[remote]` section)

use crate::remote::DEFAULT_ENDPOINT;
use quotegen_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw remote API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRemoteConfig {
    /// URL returning a JSON array of `{quote, author}` objects
    pub endpoint: String,
}

impl Default for FileRemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl FileRemoteConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return vec![ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "remote.endpoint".to_string(),
                },
                "remote.endpoint: must not be empty",
            )];
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return vec![ConfigIssue::error(
                ConfigIssueCode::InvalidEndpoint {
                    value: self.endpoint.clone(),
                },
                format!(
                    "remote.endpoint: '{}' is not an http(s) URL",
                    self.endpoint
                ),
            )];
        }
        Vec::new()
    }
}
