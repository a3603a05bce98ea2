use serde::Serialize;

/// Token accounting reported alongside a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CompletionUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl CompletionUsage {
    /// What `total_tokens` should be given the other two counts.
    pub fn expected_total(&self) -> u64 {
        self.prompt_tokens.saturating_add(self.completion_tokens)
    }

    pub fn is_consistent(&self) -> bool {
        self.expected_total() == self.total_tokens
    }
}
