//! Application-level configuration.
//!
//! Settings that change how the session behaves, independent of where
//! they were loaded from.

use quotegen_domain::{DEFAULT_EXCLUDED_TARGETS, ShareTarget};

/// Session behavior configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Share targets that must never receive a quote.
    pub excluded_share_targets: Vec<ShareTarget>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            excluded_share_targets: DEFAULT_EXCLUDED_TARGETS.to_vec(),
        }
    }
}

impl SessionConfig {
    pub fn with_excluded_share_targets(mut self, targets: Vec<ShareTarget>) -> Self {
        self.excluded_share_targets = targets;
        self
    }
}
