use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::usage_check::UsageCheck;
use crate::structs::completion::completion_choice::CompletionChoice;
use crate::structs::completion::completion_usage::CompletionUsage;

/// A decoded text-completion response.
///
/// Values are produced once by
/// [`ResponseDecoder`](crate::services::response_decoder::ResponseDecoder) and
/// are plain data afterwards. Serializing one yields the wire field names;
/// deserializing goes through the decoder, so the same rules apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct CompletionResponse {
    #[serde(rename = "object")]
    pub object_type: String,
    /// Unix seconds, server side.
    #[serde(rename = "created")]
    pub created_at: i64,
    pub model: String,
    pub choices: Vec<CompletionChoice>,
    pub usage: Option<CompletionUsage>,
}

impl CompletionResponse {
    /// Looks a choice up by its API index, not its position.
    pub fn choice(&self, index: u32) -> Option<&CompletionChoice> {
        self.choices.iter().find(|c| c.index == index)
    }

    /// The highest-ranked choice, i.e. the one with the lowest index.
    pub fn primary_choice(&self) -> Option<&CompletionChoice> {
        self.choices.iter().min_by_key(|c| c.index)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }

    pub fn usage_check(&self) -> UsageCheck {
        match &self.usage {
            None => UsageCheck::NotReported,
            Some(usage) if usage.is_consistent() => UsageCheck::Consistent,
            Some(usage) => UsageCheck::Mismatch {
                expected: usage.expected_total(),
                reported: usage.total_tokens,
            },
        }
    }
}
