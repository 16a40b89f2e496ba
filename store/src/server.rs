//! HTTP surface over [`TodoStore`]: `/api/todos` routes with envelope
//! responses. Failures travel inside the envelope (404 unknown id on
//! update/delete, 500 storage I/O); the HTTP status stays 200 for every
//! request the router can parse.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::envelope::Envelope;
use crate::store::{Todo, TodoRequest, TodoStore};

/// Shared server state. The mutex is held across each whole store call:
/// every operation is a read-modify-write of the entire collection, so
/// interleaving two handlers would lose updates.
pub type Db = Arc<Mutex<TodoStore>>;

pub fn app(store: TodoStore) -> Router {
    let db: Db = Arc::new(Mutex::new(store));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Envelope<Vec<Todo>>> {
    let mut store = db.lock().await;
    Json(match store.list() {
        Ok(todos) => Envelope::ok(todos),
        Err(err) => Envelope::failure(500, err.to_string()),
    })
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoRequest>,
) -> Json<Envelope<Todo>> {
    let mut store = db.lock().await;
    Json(match store.create(input) {
        Ok(todo) => Envelope::ok(todo),
        Err(err) => Envelope::failure(500, err.to_string()),
    })
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Json<Envelope<Todo>> {
    let mut store = db.lock().await;
    Json(match store.get(id) {
        Ok(Some(todo)) => Envelope::ok(todo),
        Ok(None) => Envelope::ok_empty(),
        Err(err) => Envelope::failure(500, err.to_string()),
    })
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TodoRequest>,
) -> Json<Envelope<Todo>> {
    let mut store = db.lock().await;
    Json(match store.update(id, input) {
        Ok(Some(todo)) => Envelope::ok(todo),
        Ok(None) => Envelope::not_found(),
        Err(err) => Envelope::failure(500, err.to_string()),
    })
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Json<Envelope<Todo>> {
    let mut store = db.lock().await;
    Json(match store.delete(id) {
        Ok(true) => Envelope::ok_empty(),
        Ok(false) => Envelope::not_found(),
        Err(err) => Envelope::failure(500, err.to_string()),
    })
}
