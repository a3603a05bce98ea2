use std::collections::HashSet;
use std::str::FromStr;
use serde_json::{Map, Value};
use crate::config::constants::{
    FIELD_CHOICES, FIELD_COMPLETION_TOKENS, FIELD_CREATED, FIELD_FINISH_REASON, FIELD_INDEX,
    FIELD_LOGPROBS, FIELD_MODEL, FIELD_OBJECT, FIELD_PROMPT_TOKENS, FIELD_TEXT,
    FIELD_TOTAL_TOKENS, FIELD_USAGE,
};
use crate::enums::payload::Payload;
use crate::errors::{DecodeError, DecodeResult};
use crate::helpers::field_reader::FieldReader;
use crate::structs::completion::completion_choice::CompletionChoice;
use crate::structs::completion::completion_response::CompletionResponse;
use crate::structs::completion::completion_usage::CompletionUsage;

/// Turns completion-API payloads into [`CompletionResponse`] values.
///
/// Decoding is a pure function of the payload: no I/O, no logging, no shared
/// state. Unknown fields are ignored. A single bad choice fails the whole
/// decode rather than being dropped.
pub struct ResponseDecoder;

impl ResponseDecoder {
    pub fn decode<'a>(payload: impl Into<Payload<'a>>) -> DecodeResult<CompletionResponse> {
        match payload.into() {
            Payload::Bytes(bytes) => Self::decode_slice(bytes),
            Payload::Text(text) => Self::decode_str(text),
            Payload::Value(value) => Self::decode_value(&value),
        }
    }

    pub fn decode_str(text: &str) -> DecodeResult<CompletionResponse> {
        let value: Value = serde_json::from_str(text)?;
        Self::decode_value(&value)
    }

    pub fn decode_slice(bytes: &[u8]) -> DecodeResult<CompletionResponse> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::decode_value(&value)
    }

    pub fn decode_value(value: &Value) -> DecodeResult<CompletionResponse> {
        let object = value.as_object().ok_or_else(|| {
            DecodeError::malformed(format!("expected a JSON object at top level, found {}", Self::kind(value)))
        })?;
        let reader = FieldReader::new(object);

        let object_type = reader.required_str(FIELD_OBJECT)?.to_string();
        let created_at = reader.required_i64(FIELD_CREATED)?;
        let model = reader.required_non_empty_str(FIELD_MODEL)?.to_string();
        let choices = Self::decode_choices(reader.required_array(FIELD_CHOICES)?)?;
        let usage = Self::decode_usage(&reader)?;

        Ok(CompletionResponse {
            object_type,
            created_at,
            model,
            choices,
            usage,
        })
    }

    fn decode_choices(elements: &[Value]) -> DecodeResult<Vec<CompletionChoice>> {
        let mut seen = HashSet::with_capacity(elements.len());
        let mut choices = Vec::with_capacity(elements.len());

        for (position, element) in elements.iter().enumerate() {
            let object = element
                .as_object()
                .ok_or_else(|| DecodeError::choice_field(FIELD_CHOICES, position))?;
            let choice = Self::decode_choice(object, position)?;

            if !seen.insert(choice.index) {
                return Err(DecodeError::choice_field(FIELD_INDEX, position));
            }
            choices.push(choice);
        }

        Ok(choices)
    }

    fn decode_choice(object: &Map<String, Value>, position: usize) -> DecodeResult<CompletionChoice> {
        let reader = FieldReader::for_choice(object, position);

        Ok(CompletionChoice {
            text: reader.required_str(FIELD_TEXT)?.to_string(),
            index: reader.required_u32(FIELD_INDEX)?,
            log_probabilities: reader.optional_value(FIELD_LOGPROBS).cloned(),
            finish_reason: reader.optional_str(FIELD_FINISH_REASON)?.map(str::to_string),
        })
    }

    fn decode_usage(reader: &FieldReader<'_>) -> DecodeResult<Option<CompletionUsage>> {
        let Some(value) = reader.present(FIELD_USAGE) else {
            return Ok(None);
        };
        let object = value.as_object().ok_or_else(|| reader.error(FIELD_USAGE))?;
        let usage = FieldReader::scoped(object, FIELD_USAGE);

        Ok(Some(CompletionUsage {
            prompt_tokens: usage.required_u64(FIELD_PROMPT_TOKENS)?,
            completion_tokens: usage.required_u64(FIELD_COMPLETION_TOKENS)?,
            total_tokens: usage.required_u64(FIELD_TOTAL_TOKENS)?,
        }))
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}

impl TryFrom<&Value> for CompletionResponse {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        ResponseDecoder::decode_value(value)
    }
}

impl TryFrom<Value> for CompletionResponse {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        ResponseDecoder::decode_value(&value)
    }
}

impl FromStr for CompletionResponse {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseDecoder::decode_str(s)
    }
}
