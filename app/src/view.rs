//! Pure view derivations over a snapshot of controller state.
//!
//! # Design
//! Nothing here caches or mutates: filter, page count, page slice, and
//! urgency are all recomputed on demand from `(records, search, page,
//! page_size)`. The visible page is clamped into `[1, total_pages]` at
//! derivation time, so a filter that shrinks the result set can never
//! strand the view on a page past the end.

use todo_client::Todo;

/// Page sizes the front end offers.
pub const PAGE_SIZES: [usize; 3] = [5, 10, 20];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Lookahead window for the urgency flag: three days, in milliseconds.
pub const URGENCY_WINDOW_MS: i64 = 3 * 24 * 60 * 60 * 1000;

/// The derived visible page.
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a Todo>,
    /// The clamped page actually shown, which may differ from the page the
    /// user requested.
    pub page: usize,
    pub total_pages: usize,
    /// Records matching the search, across all pages.
    pub filtered_count: usize,
}

/// Records whose text contains `search`, case-insensitively, in store
/// order. An empty search matches everything.
pub fn filter<'a>(todos: &'a [Todo], search: &str) -> Vec<&'a Todo> {
    let needle = search.to_lowercase();
    todos
        .iter()
        .filter(|todo| todo.text.to_lowercase().contains(&needle))
        .collect()
}

/// Never 0: an empty result set still has one (empty) page.
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages)
}

/// A deadline is coming due when it falls before now plus the lookahead
/// window. Derived at render time, never persisted.
pub fn is_deadline_coming(deadline: i64, now: i64) -> bool {
    deadline < now + URGENCY_WINDOW_MS
}

/// Derives the full page view in one pass: filter, count, clamp, slice.
pub fn derive<'a>(todos: &'a [Todo], search: &str, page: usize, page_size: usize) -> PageView<'a> {
    let filtered = filter(todos, search);
    let total = total_pages(filtered.len(), page_size);
    let page = clamp_page(page, total);
    let filtered_count = filtered.len();
    let items = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();
    PageView {
        items,
        page,
        total_pages: total,
        filtered_count,
    }
}
