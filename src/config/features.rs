//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Publish journey events after each completion
    #[serde(default = "default_publish_events")]
    pub publish_events: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            publish_events: default_publish_events(),
        }
    }
}

fn default_publish_events() -> bool {
    true
}
