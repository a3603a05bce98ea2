pub const FIELD_OBJECT: &str = "object";
pub const FIELD_CREATED: &str = "created";
pub const FIELD_MODEL: &str = "model";
pub const FIELD_CHOICES: &str = "choices";
pub const FIELD_USAGE: &str = "usage";

pub const FIELD_TEXT: &str = "text";
pub const FIELD_INDEX: &str = "index";
pub const FIELD_LOGPROBS: &str = "logprobs";
pub const FIELD_FINISH_REASON: &str = "finish_reason";

pub const FIELD_PROMPT_TOKENS: &str = "prompt_tokens";
pub const FIELD_COMPLETION_TOKENS: &str = "completion_tokens";
pub const FIELD_TOTAL_TOKENS: &str = "total_tokens";

pub const FINISH_REASON_STOP: &str = "stop";
pub const FINISH_REASON_LENGTH: &str = "length";

pub const CONFIG_PATH_ENV: &str = "COMPLETION_DECODER_CONFIG";
pub const CONFIG_DIR_NAME: &str = "completion-decoder";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const STDIN_SOURCE_NAME: &str = "<stdin>";
