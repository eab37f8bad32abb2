//! In-memory TODO list API served over HTTP.
//!
//! # Design
//! A single `TodoStore` sits behind one tokio `RwLock`. Readers share the
//! lock; every mutation holds it exclusively for the full lookup-and-write,
//! so concurrent creates never hand out the same id.

pub mod config;
pub mod error;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{store_key, ApiError, AppJson, AppPath};
pub use store::{StoreError, Todo, TodoInput, TodoStore};

pub type Db = Arc<RwLock<TodoStore>>;

const ENDPOINTS: [(&str, &str); 6] = [
    ("GET /todos", "List all todos"),
    ("POST /todos", "Create todo"),
    ("GET /todos/{id}", "Get todo by ID"),
    ("PUT /todos/{id}", "Update todo"),
    ("DELETE /todos/{id}", "Delete todo"),
    ("GET /health", "Health check"),
];

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub todos_count: usize,
}

pub fn app() -> Router {
    app_with_store(Arc::new(RwLock::new(TodoStore::new())))
}

pub fn app_with_store(db: Db) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, then finish in-flight requests.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app()).with_graceful_shutdown(shutdown).await
}

async fn service_info() -> Json<ServiceInfo> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(route, summary)| (route.to_string(), serde_json::Value::from(*summary)))
        .collect();
    Json(ServiceInfo {
        message: "TODO API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

async fn health(State(db): State<Db>) -> Json<Health> {
    let todos = db.read().await;
    Json(Health {
        status: "healthy",
        todos_count: todos.len(),
    })
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.list())
}

async fn create_todo(
    State(db): State<Db>,
    AppJson(input): AppJson<TodoInput>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.create(input);
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Todo>, ApiError> {
    let id = store_key(id)?;
    let todos = db.read().await;
    Ok(Json(todos.get(id)?))
}

async fn update_todo(
    State(db): State<Db>,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<TodoInput>,
) -> Result<Json<Todo>, ApiError> {
    let id = store_key(id)?;
    let mut todos = db.write().await;
    Ok(Json(todos.update(id, input)?))
}

async fn delete_todo(
    State(db): State<Db>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
    db.write().await.delete(store_key(id)?)?;
    Ok(StatusCode::NO_CONTENT)
}
