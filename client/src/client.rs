//! Stateless request builder and envelope parser for the to-do API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; [`TodoApi`](crate::TodoApi) pairs them around a
//! transport.
//!
//! Parsing checks the layers in a fixed order: HTTP status, envelope
//! decode, inner code (404 becomes `NotFound`), then the payload rule for
//! the operation. The payload rules are deliberately asymmetric and
//! documented here once: `list` is lenient (absent `data` is an empty
//! collection), `create`/`get`/`update` are strict (a success envelope must
//! carry `data`), and `delete` ignores `data` entirely.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Envelope, Todo, TodoRequest};

/// Synchronous, stateless client for the to-do API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller executes the HTTP round-trip between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, fields: &TodoRequest) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(fields).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_todo(
        &self,
        id: u64,
        fields: &TodoRequest,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(fields).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/todos/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Lenient collection rule: absent `data` on success is an empty list.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        let envelope: Envelope<Vec<Todo>> = decode_envelope(response)?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Strict single-record rule: a success envelope must carry `data`.
    /// The store answers a get for an unknown id with a success envelope
    /// and no `data`, so that case surfaces as `MissingData`.
    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        let envelope: Envelope<Todo> = decode_envelope(response)?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        let envelope: Envelope<Todo> = decode_envelope(response)?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        let envelope: Envelope<Todo> = decode_envelope(response)?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    /// Delete carries no payload; only the envelope code matters.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        let _: Envelope<serde_json::Value> = decode_envelope(response)?;
        Ok(())
    }
}

/// Shared front half of every parse: reject non-2xx statuses, decode the
/// envelope, then gate on the inner code. Envelope code 404 is the store's
/// not-found signal for update/delete.
fn decode_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<Envelope<T>, ApiError> {
    if !(200..300).contains(&response.status) {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    let envelope: Envelope<T> = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;
    match envelope.code {
        200 => Ok(envelope),
        404 => Err(ApiError::NotFound),
        code => Err(ApiError::Envelope {
            code,
            message: envelope.message.unwrap_or_default(),
        }),
    }
}
