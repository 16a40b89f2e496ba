//! Domain DTOs for the to-do API.
//!
//! # Design
//! These types mirror the store's schema but are defined independently.
//! Keeping them separate means this crate stays free of server internals
//! and the wire contract is written down twice on purpose — integration
//! tests catch any drift between the two.

use serde::{Deserialize, Serialize};

/// A single to-do record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub done: bool,
    /// Milliseconds since the Unix epoch.
    pub deadline: i64,
}

/// Request payload for create and update: the complete field set of a
/// record minus its id. An update replaces every field; there is no
/// partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRequest {
    pub text: String,
    #[serde(default)]
    pub done: bool,
    pub deadline: i64,
}

impl From<&Todo> for TodoRequest {
    fn from(todo: &Todo) -> Self {
        Self {
            text: todo.text.clone(),
            done: todo.done,
            deadline: todo.deadline,
        }
    }
}

/// The `{code, message?, data?}` wrapper around every store response. The
/// inner `code` — not the HTTP status — decides the outcome: a 200 HTTP
/// response carrying `code: 404` is a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
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
