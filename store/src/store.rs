//! The record store: CRUD over one serialized collection.
//!
//! # Design
//! The authoritative state is the storage blob, not this struct. Every
//! operation loads the entire collection, mutates it, and writes the entire
//! collection back. Methods take `&mut self`, so a second writer cannot
//! exist while a read-modify-write is in flight; callers that share a store
//! across tasks must hold a lock around each whole call (the HTTP layer in
//! [`server`](crate::server) does).

use std::io;

use serde::{Deserialize, Serialize};

use crate::storage::{MemoryStorage, Storage};

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub done: bool,
    /// Milliseconds since the Unix epoch.
    pub deadline: i64,
}

/// The complete field set of a record minus its id. Create and update both
/// carry all fields; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRequest {
    pub text: String,
    #[serde(default)]
    pub done: bool,
    pub deadline: i64,
}

impl TodoRequest {
    fn into_todo(self, id: u64) -> Todo {
        Todo {
            id,
            text: self.text,
            done: self.done,
            deadline: self.deadline,
        }
    }
}

/// Sole writer of persisted record state. Enforces id assignment and
/// existence checks; delegates byte storage to an injected [`Storage`].
pub struct TodoStore {
    storage: Box<dyn Storage>,
}

impl TodoStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Store over volatile in-process storage.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// All records in append order. Content problems never fail a list;
    /// only physical I/O can.
    pub fn list(&mut self) -> io::Result<Vec<Todo>> {
        self.load_records()
    }

    /// The record with `id`, or `None`. Absence is not a failure.
    pub fn get(&mut self, id: u64) -> io::Result<Option<Todo>> {
        Ok(self.load_records()?.into_iter().find(|todo| todo.id == id))
    }

    /// Appends a new record under `max(existing ids) + 1`, or 1 for an
    /// empty store. Deleting the max-id record frees its id for the next
    /// create: ids are unique at any instant but not monotonic across
    /// deletions.
    pub fn create(&mut self, fields: TodoRequest) -> io::Result<Todo> {
        let mut todos = self.load_records()?;
        let id = todos.iter().map(|todo| todo.id).max().map_or(1, |max| max + 1);
        let todo = fields.into_todo(id);
        todos.push(todo.clone());
        self.save_records(&todos)?;
        Ok(todo)
    }

    /// Replaces the record with `id` in place, keeping its list position.
    /// `None` when no record has that id; nothing is created.
    pub fn update(&mut self, id: u64, fields: TodoRequest) -> io::Result<Option<Todo>> {
        let mut todos = self.load_records()?;
        let Some(slot) = todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };
        *slot = fields.into_todo(id);
        let updated = slot.clone();
        self.save_records(&todos)?;
        Ok(Some(updated))
    }

    /// Removes the record with `id`; `false` when nothing matched.
    pub fn delete(&mut self, id: u64) -> io::Result<bool> {
        let mut todos = self.load_records()?;
        let Some(index) = todos.iter().position(|todo| todo.id == id) else {
            return Ok(false);
        };
        todos.remove(index);
        self.save_records(&todos)?;
        Ok(true)
    }

    /// Loads the whole collection. A missing blob is an empty collection; a
    /// blob that fails to parse is treated as empty and immediately
    /// rewritten as an empty array, overwriting the corrupt content.
    fn load_records(&mut self) -> io::Result<Vec<Todo>> {
        let Some(blob) = self.storage.load()? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(todos) => Ok(todos),
            Err(_) => {
                let empty = Vec::new();
                self.save_records(&empty)?;
                Ok(empty)
            }
        }
    }

    fn save_records(&mut self, todos: &[Todo]) -> io::Result<()> {
        let blob = serde_json::to_string(todos)?;
        self.storage.save(&blob)
    }
}
