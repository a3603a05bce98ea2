//! Typed, validating decoder for text-completion API responses.
//!
//! ```
//! use completion_decoder::ResponseDecoder;
//!
//! let body = r#"{"object":"text_completion","created":1690000000,"model":"gpt-3.5-turbo",
//!     "choices":[{"text":"Hello","index":0,"logprobs":null,"finish_reason":"stop"}]}"#;
//! let response = ResponseDecoder::decode(body).unwrap();
//! assert_eq!(response.choices[0].text, "Hello");
//! assert!(response.usage.is_none());
//! ```

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod workers;

pub use enums::payload::Payload;
pub use enums::usage_check::UsageCheck;
pub use errors::{DecodeError, DecodeResult};
pub use services::response_decoder::ResponseDecoder;
pub use structs::completion::completion_choice::CompletionChoice;
pub use structs::completion::completion_response::CompletionResponse;
pub use structs::completion::completion_usage::CompletionUsage;
