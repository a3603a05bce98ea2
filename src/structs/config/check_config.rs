use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// How the inspector reacts to the advisory usage invariant.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    #[serde(default = "ConfigHelper::default_warn_on_usage_mismatch")]
    pub warn_on_usage_mismatch: bool,

    #[serde(default)]
    pub fail_on_usage_mismatch: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            warn_on_usage_mismatch: ConfigHelper::default_warn_on_usage_mismatch(),
            fail_on_usage_mismatch: false,
        }
    }
}
