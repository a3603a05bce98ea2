use serde::Serialize;

/// Outcome of comparing `total_tokens` with prompt plus completion tokens.
/// A mismatch is a data-quality signal, not a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UsageCheck {
    NotReported,
    Consistent,
    Mismatch { expected: u64, reported: u64 },
}
