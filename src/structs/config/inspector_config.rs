use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::check_config::CheckConfig;
use crate::structs::config::output_config::OutputConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    #[serde(default = "ConfigHelper::default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub checks: CheckConfig,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            log_level: ConfigHelper::default_log_level(),
            output: OutputConfig::default(),
            checks: CheckConfig::default(),
        }
    }
}
