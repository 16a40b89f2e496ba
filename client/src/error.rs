//! Error types for the to-do API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "no record with that id" from "the store misbehaved". The
//! other variants keep the failure layers apart: the transport produced
//! nothing, the HTTP status was non-2xx, the envelope carried a failure
//! code, or a success envelope for a single-record operation arrived
//! without its payload.

use std::fmt;

use crate::http::TransportError;

/// Errors returned by `TodoClient` parse methods and `TodoApi` calls.
#[derive(Debug)]
pub enum ApiError {
    /// The envelope carried code 404 — no record with the requested id.
    /// Only update and delete produce this; a get for an absent id comes
    /// back as a success envelope without data (`MissingData`).
    NotFound,

    /// The transport produced no response at all.
    Transport(TransportError),

    /// The HTTP status was outside 2xx; the envelope never got decoded.
    Http { status: u16, body: String },

    /// The envelope carried a failure code other than 404.
    Envelope { code: u16, message: String },

    /// A success envelope for a single-record operation had no `data`.
    MissingData,

    /// The response body could not be deserialized into an envelope.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "record not found"),
            ApiError::Transport(err) => write!(f, "{err}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Envelope { code, message } => write!(f, "{code} : {message}"),
            ApiError::MissingData => write!(f, "success response carried no data"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err)
    }
}
