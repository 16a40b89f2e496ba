//! The `{code, message?, data?}` wrapper around every store response.

use serde::{Deserialize, Serialize};

/// Response wrapper. The inner `code` — not the HTTP status — signals the
/// outcome: 200 is success, anything else is an application-level failure
/// even when the HTTP round-trip itself returned 200. `message` and `data`
/// are omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Envelope<T> {
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            message: None,
            data: Some(data),
        }
    }

    /// Success without a payload: delete replies, and get replies for ids
    /// with no matching record.
    pub fn ok_empty() -> Self {
        Self {
            code: 200,
            message: None,
            data: None,
        }
    }

    pub fn not_found() -> Self {
        Self::failure(404, "Not Found")
    }

    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
        }
    }
}
