use serde::Serialize;
use serde_json::Value;
use crate::config::constants::{FINISH_REASON_LENGTH, FINISH_REASON_STOP};

/// One candidate completion. `index` is assigned by the API and is the only
/// reliable way to tell choices apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionChoice {
    pub text: String,
    pub index: u32,
    /// Preserved as-is; its shape depends on the request mode.
    #[serde(rename = "logprobs")]
    pub log_probabilities: Option<Value>,
    pub finish_reason: Option<String>,
}

impl CompletionChoice {
    pub fn is_stopped(&self) -> bool {
        self.finish_reason.as_deref() == Some(FINISH_REASON_STOP)
    }

    /// Generation hit the token limit.
    pub fn is_truncated(&self) -> bool {
        self.finish_reason.as_deref() == Some(FINISH_REASON_LENGTH)
    }
}
