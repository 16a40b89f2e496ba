//! Application layer of the to-do manager: state controller, pure view
//! derivations, and the transports that execute the client's requests.
//!
//! # Overview
//! [`Controller`] holds everything the front end shows — input buffers,
//! search text, pagination, selection, the detached edit buffer, and a
//! cached record list that is only ever replaced wholesale by re-listing
//! from the store. [`view`] derives the visible page from an immutable
//! snapshot of that state. [`transport`] supplies the two ways requests get
//! executed: in-process against a [`TodoStore`](todo_store::TodoStore), or
//! over real HTTP via ureq.

pub mod controller;
pub mod transport;
pub mod view;

pub use controller::{BulkDelete, Controller};
pub use transport::{HttpTransport, StoreTransport};
pub use view::PageView;
