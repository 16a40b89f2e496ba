//! Transport-bound call surface: one method per operation.
//!
//! # Design
//! `TodoApi` pairs `TodoClient`'s build/parse halves around a [`Transport`].
//! Every method performs exactly one request/response cycle — no retry, no
//! timeout override, no caching. Callers own whatever caching they need;
//! the controller re-lists after each mutation instead of merging locally.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Todo, TodoRequest};

pub struct TodoApi<T: Transport> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn list(&mut self) -> Result<Vec<Todo>, ApiError> {
        let request = self.client.build_list_todos();
        let response = self.transport.send(request)?;
        self.client.parse_list_todos(response)
    }

    pub fn create(&mut self, fields: &TodoRequest) -> Result<Todo, ApiError> {
        let request = self.client.build_create_todo(fields)?;
        let response = self.transport.send(request)?;
        self.client.parse_create_todo(response)
    }

    /// Fetches one record. An id with no record comes back from the store
    /// as a success envelope without data, so it surfaces as
    /// [`ApiError::MissingData`].
    pub fn get(&mut self, id: u64) -> Result<Todo, ApiError> {
        let request = self.client.build_get_todo(id);
        let response = self.transport.send(request)?;
        self.client.parse_get_todo(response)
    }

    pub fn update(&mut self, id: u64, fields: &TodoRequest) -> Result<Todo, ApiError> {
        let request = self.client.build_update_todo(id, fields)?;
        let response = self.transport.send(request)?;
        self.client.parse_update_todo(response)
    }

    pub fn delete(&mut self, id: u64) -> Result<(), ApiError> {
        let request = self.client.build_delete_todo(id);
        let response = self.transport.send(request)?;
        self.client.parse_delete_todo(response)
    }
}
