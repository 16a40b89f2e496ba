use tokio::net::TcpListener;

use todo_store::{FileStorage, TodoStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let store_path =
        std::env::var("TODO_STORE_PATH").unwrap_or_else(|_| "todos.json".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, store = %store_path, "todo store listening");
    todo_store::run(listener, TodoStore::new(FileStorage::new(store_path))).await
}
