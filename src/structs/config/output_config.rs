use serde::{Deserialize, Serialize};
use crate::enums::output_format::OutputFormat;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "ConfigHelper::default_show_logprobs")]
    pub show_logprobs: bool,

    #[serde(default = "ConfigHelper::default_max_text_preview")]
    pub max_text_preview: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_logprobs: ConfigHelper::default_show_logprobs(),
            max_text_preview: ConfigHelper::default_max_text_preview(),
        }
    }
}
