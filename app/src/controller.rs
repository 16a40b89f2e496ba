//! Application state controller: buffers, selection, pagination, and the
//! calls that keep the cached record list in sync with the store.
//!
//! # Design
//! The cached list is never merged locally: after every mutation the
//! controller re-lists from the store and replaces the cache wholesale.
//! The edit buffer is a detached owned copy of one record — field edits
//! touch only the buffer, and nothing reaches the store until an explicit
//! save. Derived state (filtered list, visible page) is never stored here;
//! [`visible`](Controller::visible) recomputes it from the snapshot via
//! [`view`](crate::view).

use std::collections::BTreeSet;

use todo_client::{ApiError, Todo, TodoApi, TodoRequest, Transport};

use crate::view::{self, PageView, DEFAULT_PAGE_SIZE, PAGE_SIZES};

/// Outcome of a bulk delete. The batch is best-effort: a failed id does not
/// stop the rest, nothing is rolled back, and the selection clears no
/// matter what, so the report is the only record of what actually happened.
#[derive(Debug, Default)]
pub struct BulkDelete {
    pub deleted: Vec<u64>,
    pub failed: Vec<(u64, ApiError)>,
}

pub struct Controller<T: Transport> {
    api: TodoApi<T>,
    todos: Vec<Todo>,
    input_text: String,
    input_deadline: i64,
    search: String,
    page: usize,
    page_size: usize,
    selected: BTreeSet<u64>,
    edit: Option<Todo>,
}

impl<T: Transport> Controller<T> {
    pub fn new(api: TodoApi<T>) -> Self {
        Self {
            api,
            todos: Vec::new(),
            input_text: String::new(),
            input_deadline: 0,
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selected: BTreeSet::new(),
            edit: None,
        }
    }

    /// Replaces the cache with a fresh list from the store.
    pub fn refresh(&mut self) -> Result<(), ApiError> {
        self.todos = self.api.list()?;
        Ok(())
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    // --- input buffer ---

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_deadline(&mut self, deadline: i64) {
        self.input_deadline = deadline;
    }

    pub fn input_deadline(&self) -> i64 {
        self.input_deadline
    }

    /// Creates a record from the input buffer, `done` always false, then
    /// re-syncs the cache. The input buffer is left as-is.
    pub fn add(&mut self) -> Result<Todo, ApiError> {
        let fields = TodoRequest {
            text: self.input_text.clone(),
            done: false,
            deadline: self.input_deadline,
        };
        let created = self.api.create(&fields)?;
        self.refresh()?;
        Ok(created)
    }

    // --- search and pagination ---

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Stores the requested page; the derivation clamps it into range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Rejects sizes outside the offered set. Changing size resets to
    /// page 1.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page = 1;
        true
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The visible page, derived from the current snapshot.
    pub fn visible(&self) -> PageView<'_> {
        view::derive(&self.todos, &self.search, self.page, self.page_size)
    }

    // --- selection ---

    pub fn toggle_select(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn selected(&self) -> &BTreeSet<u64> {
        &self.selected
    }

    // --- edit buffer ---

    /// Fetches the selected record fresh from the store into the edit
    /// buffer. Returns `false` without calling anything unless exactly one
    /// id is selected.
    pub fn enter_edit(&mut self) -> Result<bool, ApiError> {
        if self.selected.len() != 1 {
            return Ok(false);
        }
        let Some(&id) = self.selected.iter().next() else {
            return Ok(false);
        };
        self.edit = Some(self.api.get(id)?);
        Ok(true)
    }

    pub fn edit(&self) -> Option<&Todo> {
        self.edit.as_ref()
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(buffer) = &mut self.edit {
            buffer.text = text.into();
        }
    }

    pub fn toggle_edit_done(&mut self) {
        if let Some(buffer) = &mut self.edit {
            buffer.done = !buffer.done;
        }
    }

    pub fn set_edit_deadline(&mut self, deadline: i64) {
        if let Some(buffer) = &mut self.edit {
            buffer.deadline = deadline;
        }
    }

    /// Drops the buffer; the stored record is untouched.
    pub fn discard_edit(&mut self) {
        self.edit = None;
    }

    /// Sends the edit buffer as a full-field update. The buffer is taken
    /// out before the call, so the editor is closed even when the save
    /// fails; the failure still reaches the caller.
    pub fn finish_edit(&mut self) -> Result<(), ApiError> {
        let Some(buffer) = self.edit.take() else {
            return Ok(());
        };
        self.api.update(buffer.id, &TodoRequest::from(&buffer))?;
        self.refresh()
    }

    // --- bulk delete ---

    /// Deletes every selected record, one call per id in ascending order.
    /// Failures are logged and collected; later deletes proceed anyway.
    /// The selection clears regardless of outcomes, then the cache
    /// re-syncs.
    pub fn remove_selected(&mut self) -> Result<BulkDelete, ApiError> {
        let mut report = BulkDelete::default();
        for id in std::mem::take(&mut self.selected) {
            match self.api.delete(id) {
                Ok(()) => report.deleted.push(id),
                Err(err) => {
                    tracing::error!(id, %err, "bulk delete item failed");
                    report.failed.push((id, err));
                }
            }
        }
        self.refresh()?;
        Ok(report)
    }
}
