//! Mock backend for the to-do API: the record store and its HTTP surface.
//!
//! # Overview
//! Authoritative record state lives in one serialized blob behind a
//! pluggable [`Storage`]. [`TodoStore`] owns the CRUD rules — sequential id
//! assignment, in-place update, whole-collection read-modify-write,
//! corrupt-blob healing — and [`server`] exposes them over `/api/todos`
//! wrapped in the `{code, message?, data?}` envelope.
//!
//! DTOs here are defined independently from the client crate on purpose;
//! integration tests catch schema drift between the two.

pub mod envelope;
pub mod server;
pub mod storage;
pub mod store;

pub use envelope::Envelope;
pub use server::{app, run, Db};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{Todo, TodoRequest, TodoStore};
