//! Synchronous API client for the to-do service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses enveloped `HttpResponse` values
//! without touching the network (host-does-IO pattern); a host-supplied
//! [`Transport`] executes the round-trips. [`TodoApi`] is the call surface:
//! one method per operation, exactly one cycle per call.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every response is the `{code, message?, data?}` envelope; an HTTP 200
//!   carrying a non-200 inner code is a failure.
//! - DTOs are defined independently from the store crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use api::TodoApi;
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{Envelope, Todo, TodoRequest};
