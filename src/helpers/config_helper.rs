use crate::config::constants::DEFAULT_LOG_LEVEL;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }

    pub fn default_show_logprobs() -> bool {
        false
    }

    pub fn default_max_text_preview() -> usize {
        200
    }

    pub fn default_warn_on_usage_mismatch() -> bool {
        true
    }
}
